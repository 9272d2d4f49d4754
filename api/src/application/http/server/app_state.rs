use std::sync::Arc;

use capturas_core::application::CapturasService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CapturasService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CapturasService) -> Self {
        Self { args, service }
    }
}
