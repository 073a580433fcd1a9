use std::path::PathBuf;

use envconfig::Envconfig;

#[derive(Debug, Clone, Envconfig)]
pub struct Config {
    /// Root of the mp4v2 source checkout.
    #[envconfig(from = "MP4V2_STAGE_SRC_DIR")]
    pub src_dir: PathBuf,
    /// The staging root, the current directory by default.
    #[envconfig(from = "MP4V2_STAGE_DST_DIR", default = ".")]
    pub dst_dir: PathBuf,
    /// Platform tree, relative to `src_dir`. Staged under the same name.
    #[envconfig(from = "MP4V2_STAGE_PLATFORM_DIR", default = "libplatform")]
    pub platform_dir: PathBuf,
    /// Library tree, relative to `src_dir`. Staged directly under the root.
    #[envconfig(from = "MP4V2_STAGE_LIBRARY_DIR", default = "src")]
    pub library_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, path::Path};

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let config =
            Config::init_from_hashmap(&env(&[("MP4V2_STAGE_SRC_DIR", "/src/mp4v2")])).unwrap();

        assert_eq!(config.src_dir, Path::new("/src/mp4v2"));
        assert_eq!(config.dst_dir, Path::new("."));
        assert_eq!(config.platform_dir, Path::new("libplatform"));
        assert_eq!(config.library_dir, Path::new("src"));
    }

    #[test]
    fn overrides() {
        let config = Config::init_from_hashmap(&env(&[
            ("MP4V2_STAGE_SRC_DIR", "/src/mp4v2"),
            ("MP4V2_STAGE_DST_DIR", "/tmp/stage"),
            ("MP4V2_STAGE_PLATFORM_DIR", "platform"),
            ("MP4V2_STAGE_LIBRARY_DIR", "lib"),
        ]))
        .unwrap();

        assert_eq!(config.dst_dir, Path::new("/tmp/stage"));
        assert_eq!(config.platform_dir, Path::new("platform"));
        assert_eq!(config.library_dir, Path::new("lib"));
    }

    #[test]
    fn src_dir_is_required() {
        assert!(Config::init_from_hashmap(&HashMap::new()).is_err());
    }
}
