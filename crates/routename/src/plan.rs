//! Everything the page shows for one load, computed without touching the DOM.

use crate::{
    climber::ClimberDataset,
    config::AppConfig,
    palette::Palette,
    route_name::{ADJECTIVES, generate_route_name},
};
use log::debug;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct PagePlan {
    pub climber_key: String,
    pub route_name: String,
    pub href: String,
    pub description_html: String,
    pub palette: Palette,
}

impl PagePlan {
    pub fn new<R: Rng + ?Sized>(
        dataset: &ClimberDataset,
        requested: Option<&str>,
        config: &AppConfig,
        rng: &mut R,
    ) -> Self {
        let climber_key = dataset.resolve(requested, rng);
        let record = dataset
            .get(climber_key)
            .expect("resolved key belongs to the dataset");
        let route_name = generate_route_name(climber_key, ADJECTIVES, config.name_style, rng);
        let palette = Palette::generate(rng, &config.palette);
        debug!("Showing `{climber_key}` as `{route_name}`, background {}", palette.background);
        PagePlan {
            climber_key: climber_key.to_string(),
            route_name,
            href: record.href.clone(),
            description_html: record.description_html.clone(),
            palette,
        }
    }
}
