use clap::{Arg, ArgAction, Command};
use lingua_i18n::{
    CacheOptions, ConfigurationValidator, TranslationLookup, TranslationProviderBuilder, Translator,
    TranslatorFactory,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("lingua")
        .version("0.1.0")
        .about("Look up translations aggregated from JSON language files")
        .arg(
            Arg::new("keys")
                .help("Translation keys to look up")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Language file to load (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .short('d')
                .help("Folder of *.json language files to load (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Language to translate into (repeatable, default: every supported language)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("default-language")
                .long("default-language")
                .help("Language used when a key is missing"),
        )
        .arg(
            Arg::new("cache")
                .long("cache")
                .short('c')
                .help("Cache mode")
                .value_parser(["none", "memory", "preload"])
                .default_value("preload"),
        )
        .arg(
            Arg::new("ttl-secs")
                .long("ttl-secs")
                .help("Expiration of cached translations in memory mode")
                .value_parser(clap::value_parser!(u64))
                .default_value("300"),
        )
        .arg(
            Arg::new("validate")
                .long("validate")
                .help("Check that every key exists once in every language before translating")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cache = match matches.get_one::<String>("cache").map(String::as_str) {
        Some("none") => CacheOptions::no_cache(),
        Some("memory") => {
            let ttl = matches.get_one::<u64>("ttl-secs").copied().unwrap_or(300);
            CacheOptions::in_memory(Duration::from_secs(ttl))
        }
        _ => CacheOptions::read_all_to_cache(),
    };

    let mut builder = TranslationProviderBuilder::new().cache(cache);
    for file in matches.get_many::<String>("file").into_iter().flatten() {
        builder = builder.add_json_file(file)?;
    }
    for dir in matches.get_many::<String>("dir").into_iter().flatten() {
        builder = builder.add_json_files_from_folder(dir)?;
    }
    if let Some(language) = matches.get_one::<String>("default-language") {
        builder = builder.default_language(language);
    }
    let provider = builder.build()?;

    if matches.get_flag("validate") {
        ConfigurationValidator::new().validate(&provider)?;
        info!("Translations are consistent");
    }

    let languages: Vec<String> = match matches.get_many::<String>("language") {
        Some(languages) => languages.cloned().collect(),
        None => provider.supported_languages(),
    };
    let keys: Vec<&String> = matches
        .get_many::<String>("keys")
        .into_iter()
        .flatten()
        .collect();

    let factory = TranslatorFactory::new(Arc::new(provider));
    for language in &languages {
        let translator = factory.create_for_language(language);
        print_translations(&translator, &keys);
    }

    Ok(())
}

fn print_translations(translator: &Translator, keys: &[&String]) {
    println!("Language {}", translator.language());
    for key in keys {
        let line = match translator.translate(key) {
            Ok(Some(value)) => value,
            Ok(None) => "<missing>".to_string(),
            Err(e) => format!("Translation failed: {}", e),
        };
        println!("  {}: {}", key, line);
    }
}
