//! Lights sub-client — light collection and single-light reads.

use crate::client::HueClient;
use crate::domain::light::Light;
use crate::http::{ListResponse, ResourceRequest};
use crate::shared::HueUuid;

/// Resource path of the light collection.
pub const LIGHTS_PATH: &str = "/lights";

pub struct Lights<'a> {
    pub(crate) client: &'a HueClient,
}

impl<'a> Lights<'a> {
    /// All lights known to the bridge.
    pub async fn list(&self) -> ListResponse<Light> {
        tracing::debug!("Getting lights");
        self.client
            .http
            .get(&ResourceRequest::new(LIGHTS_PATH))
            .await
    }

    /// A single light. The bridge answers with a one-element list.
    pub async fn get(&self, id: &HueUuid) -> ListResponse<Light> {
        let path = format!("{}/{}", LIGHTS_PATH, id);
        self.client.http.get(&ResourceRequest::new(path)).await
    }
}
