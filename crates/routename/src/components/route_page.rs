use crate::{
    app::query::ClimberQuery, climber::ClimberDataset, config::AppConfig,
    util::color::ColorTriple,
};
use log::{debug, error, warn};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoutePageProps {
    pub dataset: Rc<ClimberDataset>,
    pub config: AppConfig,
}

#[function_component(RoutePage)]
pub fn route_page(RoutePageProps { dataset, config }: &RoutePageProps) -> Html {
    let location = use_location().expect("should be called inside a router");
    let query = location.query::<ClimberQuery>().unwrap_or_else(|err| {
        warn!("Ignoring malformed query string: {err:?}");
        ClimberQuery::default()
    });
    debug!("Rendering with {query:?}");

    let plan = {
        let dataset = dataset.clone();
        let config = config.clone();
        use_memo(query, move |query| query.plan(&dataset, &config))
    };

    let description_ref = use_node_ref();

    // The description is raw HTML, its links only exist after rendering.
    use_effect_with(plan.clone(), {
        let description_ref = description_ref.clone();
        move |plan| {
            set_style(
                &gloo::utils::body(),
                "background-color",
                &plan.palette.background.to_string(),
            );
            if let Some(description) = description_ref.cast::<Element>() {
                color_links(&description, plan.palette.link);
            }
        }
    });

    let route_name_style = format!("color: {};", plan.palette.route_name);
    html! {
        <div class="container">
            <h1>
                <a id="routeName" href={plan.href.clone()} style={route_name_style}>
                    { plan.route_name.clone() }
                </a>
            </h1>
            <div id="climberDetails" ref={description_ref}>
                { Html::from_html_unchecked(AttrValue::from(plan.description_html.clone())) }
            </div>
        </div>
    }
}

fn color_links(container: &Element, color: ColorTriple) {
    let links = match container.query_selector_all("a") {
        Ok(links) => links,
        Err(err) => {
            error!("Cannot look up links in the description: {err:?}");
            return;
        }
    };
    let css = color.to_string();
    for idx in 0..links.length() {
        if let Some(link) = links.item(idx)
            && let Some(link) = link.dyn_ref::<HtmlElement>()
        {
            set_style(link, "color", &css);
        }
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        error!("Cannot set `{property}: {value}`: {err:?}");
    }
}
