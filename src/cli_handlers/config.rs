use crate::cli_handlers::CliCommand;
use crate::config::Config;
use crate::modules::ui::progress_formatter::LabelStyle;
use crate::modules::ui::terminal::renderer::TerminalRenderer;
use anyhow::Result;

pub struct ConfigCommand {
    pub style: Option<LabelStyle>,
    pub bar_width: Option<usize>,
    pub json: Option<bool>,
}

impl ConfigCommand {
    fn has_changes(&self) -> bool {
        self.style.is_some() || self.bar_width.is_some() || self.json.is_some()
    }

    fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(style) = self.style {
            config.label_style = style;
        }
        if let Some(width) = self.bar_width {
            config.bar_width = width;
        }
        if let Some(json) = self.json {
            config.json = json;
        }
        config.validate()
    }
}

impl CliCommand for ConfigCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let mut config = Config::load()?;
        let ui = TerminalRenderer::new();

        if self.has_changes() {
            self.apply(&mut config)?;
            config.save()?;
            ui.print_message("Settings saved");
        }

        ui.print_message(&format!("Config file: {}", Config::path()?.display()));
        ui.print_message(&format!("Label style: {:?}", config.label_style));
        ui.print_message(&format!("Bar width:   {}", config.bar_width));
        ui.print_message(&format!("JSON output: {}", config.json));

        Ok(())
    }
}
