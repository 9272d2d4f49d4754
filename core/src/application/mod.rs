use crate::{
    domain::common::{CapturasConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::cloudinary::CloudinaryMediaProvider,
};

pub type CapturasService = Service<CloudinaryMediaProvider>;

pub fn create_service(config: CapturasConfig) -> Result<CapturasService, CoreError> {
    let media_provider = CloudinaryMediaProvider::new(config.provider)?;

    Ok(Service::new(media_provider))
}
