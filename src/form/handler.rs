use crate::core::indicator_offset;
use crate::form::notifier::Notifier;
use crate::form::page::{inputs, regions, Page};
use crate::models::{BmiRequest, BmiResponse};
use crate::services::{BmiApiClient, BmiApiError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::Instrument;
use uuid::Uuid;

/// Alert shown when the calculation could not be completed for any reason
/// other than the service rejecting the input
pub const GENERIC_FAILURE_MESSAGE: &str = "Error calculating BMI. Please try again later.";

/// Result of a single form submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The result container was filled in and shown
    Rendered { bmi: f64, offset: f64 },
    /// The service refused the input; carries the alerted detail
    Rejected(String),
    /// Transport or parse failure; the generic alert was shown
    Failed,
}

/// Form submission handler
///
/// Owns everything a submission touches: the service client, the alert sink
/// and a shared handle to the page. The page lock is only taken to read the
/// form and to write the result, never across the network call, so
/// overlapping submissions each run to completion and the last one to
/// resolve is what the page shows.
pub struct FormHandler<N: Notifier> {
    client: BmiApiClient,
    notifier: N,
    page: Arc<Mutex<Page>>,
}

impl<N: Notifier> FormHandler<N> {
    pub fn new(client: BmiApiClient, notifier: N, page: Arc<Mutex<Page>>) -> Self {
        Self {
            client,
            notifier,
            page,
        }
    }

    /// Shared handle to the page this handler updates
    pub fn page(&self) -> Arc<Mutex<Page>> {
        Arc::clone(&self.page)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Handle one submit event
    ///
    /// Reads and coerces the four form fields, posts them to the service and
    /// either renders the result or alerts. Every failure is terminal for
    /// this submission and leaves the page untouched.
    pub async fn submit(&self) -> SubmitOutcome {
        let submission_id = Uuid::new_v4();
        let span = tracing::info_span!("submit", %submission_id);

        async move {
            let request = {
                let page = self.page.lock().await;
                BmiRequest::from_fields(
                    page.value(inputs::WEIGHT),
                    page.value(inputs::HEIGHT),
                    page.value(inputs::GENDER),
                    page.value(inputs::AGE),
                )
            };

            tracing::debug!("Submitting form: {:?}", request);

            match self.client.calculate(&request).await {
                Ok(result) => {
                    let mut page = self.page.lock().await;
                    let offset = render_result(&mut page, &result);
                    tracing::info!("Rendered BMI {} at {}px", result.bmi, offset);
                    SubmitOutcome::Rendered {
                        bmi: result.bmi,
                        offset,
                    }
                }
                Err(BmiApiError::Rejected { detail, .. }) => {
                    self.notifier.alert(&detail);
                    SubmitOutcome::Rejected(detail)
                }
                Err(e) => {
                    self.notifier.alert(GENERIC_FAILURE_MESSAGE);
                    tracing::error!("BMI calculation failed: {}", e);
                    SubmitOutcome::Failed
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Write a successful result into the page and position the indicator
///
/// Returns the indicator offset that was applied.
pub fn render_result(page: &mut Page, result: &BmiResponse) -> f64 {
    page.set_text_content(regions::BMI_VALUE, result.bmi.to_string());
    page.set_text_content(regions::BMI_CATEGORY, result.category.as_str());
    page.set_text_content(regions::BMI_ADVICE, result.advice.as_str());
    page.set_text_content(regions::IDEAL_WEIGHT, result.ideal_weight.to_string());
    page.set_text_content(regions::WEIGHT_STATUS, result.weight_status.as_str());
    page.reveal_result();

    let offset = indicator_offset(result.bmi, page.meter_width());
    page.set_indicator_left(offset);
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::notifier::RecordingNotifier;
    use crate::models::IdealWeight;
    use std::time::Duration;

    fn sample_result(bmi: f64) -> BmiResponse {
        BmiResponse {
            bmi,
            category: "Normal".to_string(),
            advice: "Maintain".to_string(),
            ideal_weight: IdealWeight::Text("65-75kg".to_string()),
            weight_status: "Healthy".to_string(),
        }
    }

    #[test]
    fn test_render_result_fills_regions() {
        let mut page = Page::new(250.0);
        let offset = render_result(&mut page, &sample_result(22.9));

        assert!(!page.is_result_hidden());
        assert_eq!(page.text_content(regions::BMI_VALUE), Some("22.9"));
        assert_eq!(page.text_content(regions::IDEAL_WEIGHT), Some("65-75kg"));
        assert!((offset - 79.0).abs() < 1e-9);
        assert_eq!(page.indicator_left(), Some(offset));
    }

    #[test]
    fn test_render_result_clamps_indicator() {
        let mut page = Page::new(300.0);
        assert_eq!(render_result(&mut page, &sample_result(52.0)), 295.0);
        assert_eq!(render_result(&mut page, &sample_result(12.0)), 0.0);
    }

    #[test]
    fn test_submit_without_service_fails_generically() {
        // Nothing listens on port 1, so the connection is refused
        let client = BmiApiClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let page = Arc::new(Mutex::new(Page::with_form(300.0, "70", "1.75", "male", "30")));
        let handler = FormHandler::new(client, RecordingNotifier::new(), page);

        let outcome = tokio_test::block_on(handler.submit());

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(handler.notifier().alerts(), vec![GENERIC_FAILURE_MESSAGE]);
        let page = tokio_test::block_on(handler.page().lock_owned());
        assert!(page.is_result_hidden());
        assert_eq!(page.text_content(regions::BMI_VALUE), None);
    }
}
