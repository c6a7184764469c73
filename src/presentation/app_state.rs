// Application state for HTTP handlers
use crate::application::ip_service::IpService;

#[derive(Clone)]
pub struct AppState {
    pub ip_service: IpService,
}
