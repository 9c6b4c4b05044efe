//! Model widget: the active model's display name, e.g. `[Opus]`.

use crate::color::paint;
use crate::config::schema::ModelWidgetConfig;
use crate::input::Snapshot;
use crate::widgets::Widget;

pub struct ModelWidget {
    config: ModelWidgetConfig,
}

impl ModelWidget {
    pub fn new(config: ModelWidgetConfig) -> Self {
        Self { config }
    }
}

impl Widget for ModelWidget {
    fn name(&self) -> &'static str {
        "model"
    }

    fn render(&self, snapshot: &Snapshot) -> Option<String> {
        let name = snapshot
            .model
            .as_ref()
            .and_then(|m| m.display_name.as_deref())
            .unwrap_or("Unknown");

        let text = self.config.format.replace("{name}", name);
        Some(paint(&text, self.config.color.as_deref()))
    }
}
