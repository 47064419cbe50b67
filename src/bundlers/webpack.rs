use anyhow::Result;
use std::path::Path;

use super::{run_build, BundlerAdapter};
use crate::core::report::ArtifactMetrics;

#[derive(Debug)]
pub struct WebpackAdapter;

impl WebpackAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn config_content(entry: &str, out_rel: &str) -> String {
        format!(
            r#"const path = require('path');
module.exports = {{
  entry: './{entry}',
  output: {{
    path: path.resolve(__dirname, '{out_rel}'),
    filename: 'bundle.js',
    clean: true,
  }},
  mode: 'production',
  optimization: {{
    usedExports: true,
    minimize: true,
  }},
  module: {{
    rules: [
      {{
        test: /\.ts$/,
        use: 'ts-loader',
        exclude: /node_modules/,
      }},
    ],
  }},
  resolve: {{
    extensions: ['.ts', '.js'],
  }},
}};
"#
        )
    }
}

impl BundlerAdapter for WebpackAdapter {
    fn name(&self) -> &str {
        "webpack"
    }

    fn build(&self, project_root: &Path, entry: &str, out_rel: &str) -> Result<ArtifactMetrics> {
        run_build(
            self.name(),
            project_root,
            "webpack.config.js",
            &Self::config_content(entry, out_rel),
            &[
                "webpack",
                "--config",
                "webpack.config.js",
                "--mode",
                "production",
            ],
            out_rel,
        )
    }
}
