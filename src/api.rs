use anyhow::Context;
use async_trait::async_trait;

use crate::models::{AppointmentPayload, NailTech, SalesRow, Service, TechnicianPayload};

/// The salon's REST backend.
#[async_trait]
pub trait SalonBackend: Send + Sync {
    async fn list_nail_techs(&self) -> anyhow::Result<Vec<NailTech>>;
    async fn create_nail_tech(&self, payload: &TechnicianPayload) -> anyhow::Result<()>;
    async fn update_nail_tech(&self, id: i64, payload: &TechnicianPayload) -> anyhow::Result<()>;
    async fn delete_nail_tech(&self, id: i64) -> anyhow::Result<()>;
    async fn list_services(&self) -> anyhow::Result<Vec<Service>>;
    async fn daily_sales_report(&self) -> anyhow::Result<Vec<SalesRow>>;
    async fn create_appointment(&self, payload: &AppointmentPayload) -> anyhow::Result<()>;
    async fn update_appointment(&self, id: i64, payload: &AppointmentPayload)
        -> anyhow::Result<()>;
}

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl SalonBackend for HttpBackend {
    async fn list_nail_techs(&self) -> anyhow::Result<Vec<NailTech>> {
        let techs = self
            .client
            .get(self.url("/api/nailtechs"))
            .send()
            .await
            .context("failed to fetch nail techs")?
            .error_for_status()
            .context("nail techs endpoint returned error")?
            .json()
            .await
            .context("invalid nail techs response body")?;
        Ok(techs)
    }

    async fn create_nail_tech(&self, payload: &TechnicianPayload) -> anyhow::Result<()> {
        self.client
            .post(self.url("/api/nailtechs"))
            .json(payload)
            .send()
            .await
            .context("failed to create nail tech")?
            .error_for_status()
            .context("create nail tech returned error")?;
        Ok(())
    }

    async fn update_nail_tech(&self, id: i64, payload: &TechnicianPayload) -> anyhow::Result<()> {
        self.client
            .put(self.url(&format!("/api/nailtechs/{id}")))
            .json(payload)
            .send()
            .await
            .context("failed to update nail tech")?
            .error_for_status()
            .context("update nail tech returned error")?;
        Ok(())
    }

    async fn delete_nail_tech(&self, id: i64) -> anyhow::Result<()> {
        self.client
            .delete(self.url(&format!("/api/nailtechs/{id}")))
            .send()
            .await
            .context("failed to delete nail tech")?
            .error_for_status()
            .context("delete nail tech returned error")?;
        Ok(())
    }

    async fn list_services(&self) -> anyhow::Result<Vec<Service>> {
        let services = self
            .client
            .get(self.url("/api/services"))
            .send()
            .await
            .context("failed to fetch services")?
            .error_for_status()
            .context("services endpoint returned error")?
            .json()
            .await
            .context("invalid services response body")?;
        Ok(services)
    }

    async fn daily_sales_report(&self) -> anyhow::Result<Vec<SalesRow>> {
        let rows = self
            .client
            .get(self.url("/api/reports/daily-sales"))
            .send()
            .await
            .context("failed to fetch daily sales report")?
            .error_for_status()
            .context("daily sales endpoint returned error")?
            .json()
            .await
            .context("invalid daily sales response body")?;
        Ok(rows)
    }

    async fn create_appointment(&self, payload: &AppointmentPayload) -> anyhow::Result<()> {
        self.client
            .post(self.url("/api/appointments"))
            .json(payload)
            .send()
            .await
            .context("failed to create appointment")?
            .error_for_status()
            .context("create appointment returned error")?;
        Ok(())
    }

    async fn update_appointment(
        &self,
        id: i64,
        payload: &AppointmentPayload,
    ) -> anyhow::Result<()> {
        self.client
            .put(self.url(&format!("/api/appointments/{id}")))
            .json(payload)
            .send()
            .await
            .context("failed to update appointment")?
            .error_for_status()
            .context("update appointment returned error")?;
        Ok(())
    }
}
