mod config;
mod stager;

pub use config::Config;
pub use stager::{StageReport, StageTree, Stager, is_staged_file};

/// Stage the platform tree and then the library tree of the checkout in
/// `config.src_dir` under `config.dst_dir`.
pub fn stage(config: &Config) -> anyhow::Result<StageReport> {
    Stager::new(&config.dst_dir)
        .tree(
            config.src_dir.join(&config.platform_dir),
            &config.platform_dir,
        )
        .tree(config.src_dir.join(&config.library_dir), "")
        .run()
}
