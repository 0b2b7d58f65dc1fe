pub mod galaxy_vcf;
use crate::core::Parser;
use std::{collections::HashMap, sync::Arc};

pub type ParserRegistry = HashMap<&'static str, Arc<dyn Parser>>;

pub fn build_registry() -> ParserRegistry {
    let mut m: ParserRegistry = HashMap::new();

    m.insert(
        "galaxy_vcf",
        Arc::new(galaxy_vcf::GalaxyVcfParser::default()) as Arc<dyn Parser>,
    );

    m
}
