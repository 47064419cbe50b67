use anyhow::Result;
use std::path::Path;

use super::{run_build, BundlerAdapter};
use crate::core::report::ArtifactMetrics;

#[derive(Debug)]
pub struct ViteAdapter;

impl ViteAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn config_content(entry: &str, out_rel: &str) -> String {
        format!(
            r#"import {{ defineConfig }} from 'vite';

export default defineConfig({{
  build: {{
    outDir: '{out_rel}',
    rollupOptions: {{
      input: './{entry}',
      output: {{
        entryFileNames: 'bundle.js',
      }},
    }},
    minify: true,
    sourcemap: true,
  }},
  esbuild: {{
    treeShaking: true,
  }},
}});
"#
        )
    }
}

impl BundlerAdapter for ViteAdapter {
    fn name(&self) -> &str {
        "vite"
    }

    fn build(&self, project_root: &Path, entry: &str, out_rel: &str) -> Result<ArtifactMetrics> {
        run_build(
            self.name(),
            project_root,
            "vite.config.ts",
            &Self::config_content(entry, out_rel),
            &["vite", "build", "--config", "vite.config.ts"],
            out_rel,
        )
    }
}
