//! The `whosthat init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("whosthat.toml").exists() {
        println!("whosthat.toml already exists, skipping.");
    } else {
        std::fs::write("whosthat.toml", SAMPLE_CONFIG)?;
        println!("Created whosthat.toml");
    }

    if std::path::Path::new("creatures.json").exists() {
        println!("creatures.json already exists, skipping.");
    } else {
        std::fs::write("creatures.json", SAMPLE_CREATURES)?;
        println!("Created creatures.json");
    }

    println!("\nNext steps:");
    println!("  1. Point whosthat.toml at your creature API, or keep the file source");
    println!("  2. Run: whosthat list");
    println!("  3. Run: whosthat play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# whosthat configuration

# seed = 42

[source]
type = "file"
path = "creatures.json"

# [source]
# type = "http"
# url = "http://localhost:8088/api/pokemon"
# timeout_secs = 10
"#;

const SAMPLE_CREATURES: &str = r#"[
  {"id": "1", "name": "Bulbasaur", "silhouette": "images/bulbasaur-silhouette.png", "image": "images/bulbasaur.png"},
  {"id": "4", "name": "Charmander", "silhouette": "images/charmander-silhouette.png", "image": "images/charmander.png"},
  {"id": "7", "name": "Squirtle", "silhouette": "images/squirtle-silhouette.png", "image": "images/squirtle.png"},
  {"id": "25", "name": "Pikachu", "silhouette": "images/pikachu-silhouette.png", "image": "images/pikachu.png"},
  {"id": "39", "name": "Jigglypuff", "silhouette": "images/jigglypuff-silhouette.png", "image": "images/jigglypuff.png"},
  {"id": "133", "name": "Eevee", "silhouette": "images/eevee-silhouette.png", "image": "images/eevee.png"}
]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use whosthat_core::model::parse_creatures;
    use whosthat_sources::{QuizConfig, SourceConfig};

    #[test]
    fn sample_config_uses_sample_file() {
        let config: QuizConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::File {
                path: "creatures.json".into()
            }
        );
        assert_eq!(config.seed, None);
    }

    #[test]
    fn sample_creatures_parse() {
        let creatures = parse_creatures(SAMPLE_CREATURES).unwrap();
        assert_eq!(creatures.len(), 6);
        assert!(creatures.iter().all(|c| c.silhouette.is_some()));
    }
}
