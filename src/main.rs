use anyhow::Result;

use classcodex::config::CodexConfig;
use classcodex::core::codex::{display_class_name, AbilityRequest, CodexLoader};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("classcodex v{} starting", classcodex::VERSION);

    let mut args = std::env::args().skip(1);
    let Some(class_name) = args.next() else {
        eprintln!("usage: classcodex <class> [subclass]");
        std::process::exit(2);
    };
    let subclass_name = args.next();

    let config = CodexConfig::load();
    let loader = CodexLoader::new(&config);

    let mut request = AbilityRequest::new(&class_name);
    if let Some(subclass_name) = subclass_name {
        request = request.with_subclass(subclass_name);
    }

    let result = loader.load_ability_sections(&request).await;
    if result.sections.is_empty() {
        println!("Aucun contenu trouvé pour {}", display_class_name(&class_name));
        return Ok(());
    }

    println!("# {}", display_class_name(&class_name));
    for section in &result.sections {
        println!();
        println!("[niveau {:>2} | {}] {}", section.level, section.origin, section.title);
        if !section.content.is_empty() {
            println!("{}", section.content);
        }
    }

    Ok(())
}
