//! Workspace widget: the current working directory, e.g. `📁 my-project`.

use std::path::Path;

use crate::color::paint;
use crate::config::schema::WorkspaceWidgetConfig;
use crate::input::Snapshot;
use crate::widgets::Widget;

pub struct WorkspaceWidget {
    config: WorkspaceWidgetConfig,
}

impl WorkspaceWidget {
    pub fn new(config: WorkspaceWidgetConfig) -> Self {
        Self { config }
    }
}

impl Widget for WorkspaceWidget {
    fn name(&self) -> &'static str {
        "workspace"
    }

    fn render(&self, snapshot: &Snapshot) -> Option<String> {
        let current_dir = snapshot.current_dir()?;
        if current_dir.is_empty() {
            return None;
        }

        let dir_name = if self.config.show_full_path {
            current_dir.to_string()
        } else {
            Path::new(current_dir)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| current_dir.to_string())
        };

        let text = self.config.format.replace("{name}", &dir_name);
        Some(paint(&text, self.config.color.as_deref()))
    }
}
