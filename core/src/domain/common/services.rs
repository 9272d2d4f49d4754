use crate::domain::media::ports::MediaProviderPort;

#[derive(Clone)]
pub struct Service<MP>
where
    MP: MediaProviderPort,
{
    pub(crate) media_provider: MP,
}

impl<MP> Service<MP>
where
    MP: MediaProviderPort,
{
    pub fn new(media_provider: MP) -> Self {
        Self { media_provider }
    }
}
