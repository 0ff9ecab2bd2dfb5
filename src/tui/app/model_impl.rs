//! `Model` trait implementation for the review analyzer TUI.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `AnalyzerApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::AnalyzerApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for AnalyzerApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new().with_telemetry_sink(crate::tui::configured_telemetry_sink());
        if let Some(gateway) = crate::tui::configured_gateway() {
            model = model.with_gateway(gateway);
        }

        // Load the history straight away so the tab count is accurate.
        let cmd = model.start();
        (model, cmd)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message(key_msg, self.input_context())?;
            return self.handle_message(&mapped);
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        self.normalise_viewport(&self.render_frame())
    }
}
