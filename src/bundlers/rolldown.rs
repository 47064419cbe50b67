use anyhow::Result;
use std::path::Path;

use super::{run_build, BundlerAdapter};
use crate::core::report::ArtifactMetrics;

#[derive(Debug)]
pub struct RolldownAdapter;

impl RolldownAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn config_content(entry: &str, out_rel: &str) -> String {
        format!(
            r#"import {{ defineConfig }} from 'rolldown';

export default defineConfig({{
  input: './{entry}',
  output: {{
    dir: '{out_rel}',
    entryFileNames: 'bundle.js',
    format: 'esm',
    sourcemap: true,
  }},
  treeshake: true,
}});
"#
        )
    }
}

impl BundlerAdapter for RolldownAdapter {
    fn name(&self) -> &str {
        "rolldown"
    }

    fn build(&self, project_root: &Path, entry: &str, out_rel: &str) -> Result<ArtifactMetrics> {
        run_build(
            self.name(),
            project_root,
            "rolldown.config.js",
            &Self::config_content(entry, out_rel),
            &["rolldown", "--config", "rolldown.config.js"],
            out_rel,
        )
    }
}
