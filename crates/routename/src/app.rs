use crate::{climber::ClimberDataset, components::route_page::RoutePage, config::AppConfig};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod query {
    use crate::{
        climber::ClimberDataset, config::AppConfig, plan::PagePlan, route_name::NameStyle,
    };
    use rand::{SeedableRng as _, rngs::SmallRng};
    use serde::{Deserialize, Serialize};
    use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

    /// Query string of the page, e.g. `?name=Lynn%20Hill&seed=7`.
    ///
    /// A malformed `seed` or `style` is dropped on its own and never hides `name`.
    #[serde_as]
    #[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ClimberQuery {
        /// Climber to show, compared ignoring case. A random one when absent or unknown.
        pub name: Option<String>,
        /// Makes the route name and colors reproducible.
        #[serde(default)]
        #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
        pub seed: Option<u64>,
        #[serde(default)]
        #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
        pub style: Option<NameStyle>,
    }

    impl ClimberQuery {
        pub fn plan(&self, dataset: &ClimberDataset, config: &AppConfig) -> PagePlan {
            let mut rng = match self.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };
            let config = AppConfig {
                name_style: self.style.unwrap_or(config.name_style),
                ..config.clone()
            };
            PagePlan::new(dataset, self.name.as_deref(), &config, &mut rng)
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct AppProps {
    pub dataset: Rc<ClimberDataset>,
    #[prop_or_default]
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(AppProps { dataset, config }: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <RoutePage dataset={dataset.clone()} config={config.clone()} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::query::ClimberQuery;
    use rstest::rstest;
    use crate::{
        climber::{ClimberDataset, ClimberRecord},
        config::AppConfig,
        route_name::NameStyle,
    };

    fn dataset() -> ClimberDataset {
        ClimberDataset::new([
            (
                "Chris Sharma".to_string(),
                ClimberRecord::new("https://example.org/sharma", ""),
            ),
            (
                "Lynn Hill".to_string(),
                ClimberRecord::new("https://example.org/hill", ""),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn seeded_query_is_reproducible() {
        let query = ClimberQuery {
            seed: Some(1234),
            ..ClimberQuery::default()
        };
        let dataset = dataset();
        let config = AppConfig::default();
        assert_eq!(query.plan(&dataset, &config), query.plan(&dataset, &config));
    }

    #[test]
    fn style_overrides_config() {
        let query = ClimberQuery {
            name: Some("lynn hill".to_string()),
            seed: Some(1),
            style: Some(NameStyle::Key),
        };
        let plan = query.plan(&dataset(), &AppConfig::default());
        assert!(plan.route_name.ends_with("-lynn hill"), "{}", plan.route_name);
    }

    #[test]
    fn configured_style_applies_without_override() {
        let query = ClimberQuery {
            name: Some("CHRIS SHARMA".to_string()),
            ..ClimberQuery::default()
        };
        let plan = query.plan(&dataset(), &AppConfig::default());
        assert_eq!("chris sharma", plan.climber_key);
        assert!(plan.route_name.ends_with("-sharma"), "{}", plan.route_name);
    }

    #[rstest]
    #[case("name=lynn%20hill&style=lastname")]
    #[case("name=lynn%20hill&seed=")]
    #[case("name=lynn%20hill&seed=-3&style=")]
    fn malformed_extras_keep_the_name(#[case] query_string: &str) {
        let query: ClimberQuery = serde_urlencoded::from_str(query_string).unwrap();
        assert_eq!(Some("lynn hill"), query.name.as_deref());
        let plan = query.plan(&dataset(), &AppConfig::default());
        assert_eq!("lynn hill", plan.climber_key);
    }

    #[test]
    fn well_formed_extras_are_parsed() {
        let query: ClimberQuery =
            serde_urlencoded::from_str("name=Chris%20Sharma&seed=7&style=key").unwrap();
        assert_eq!(
            ClimberQuery {
                name: Some("Chris Sharma".to_string()),
                seed: Some(7),
                style: Some(NameStyle::Key),
            },
            query
        );
    }

    #[test]
    fn empty_query_string_is_default() {
        let query: ClimberQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(ClimberQuery::default(), query);
    }
}
