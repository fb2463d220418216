use crate::errors::Result;
use crate::payments::{compute_breakdown, PaymentBreakdown, PaymentRecord};

use super::document::{render_document, ExportDocument};
use super::share::{share_link, share_subject, share_text, ShareChannel};
use super::summary::render_summary;

/// A presentation surface for one payment.
pub trait PaymentExporter {
    type Output;

    fn render(&self, record: &PaymentRecord, breakdown: &PaymentBreakdown)
        -> Result<Self::Output>;
}

/// Computes the breakdown of `record` once and hands both to `exporter`.
///
/// `record` is a snapshot: the caller keeps editing its own copy while the
/// export works from this one.
pub fn export_snapshot<E: PaymentExporter>(
    exporter: &E,
    record: PaymentRecord,
) -> Result<E::Output> {
    let breakdown = compute_breakdown(&record);
    exporter.render(&record, &breakdown)
}

/// Plain-text running summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryExporter;

impl PaymentExporter for SummaryExporter {
    type Output = String;

    fn render(&self, record: &PaymentRecord, breakdown: &PaymentBreakdown) -> Result<String> {
        Ok(render_summary(record, breakdown))
    }
}

/// Printable HTML document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExporter;

impl PaymentExporter for DocumentExporter {
    type Output = ExportDocument;

    fn render(
        &self,
        record: &PaymentRecord,
        breakdown: &PaymentBreakdown,
    ) -> Result<ExportDocument> {
        render_document(record, breakdown)
    }
}

/// A message ready to be sent through one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMessage {
    pub channel: ShareChannel,
    /// Only the email channel has a subject.
    pub subject: Option<String>,
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ShareExporter {
    pub channel: ShareChannel,
}

impl ShareExporter {
    pub fn new(channel: ShareChannel) -> Self {
        Self { channel }
    }
}

impl PaymentExporter for ShareExporter {
    type Output = ShareMessage;

    fn render(&self, record: &PaymentRecord, breakdown: &PaymentBreakdown) -> Result<ShareMessage> {
        Ok(ShareMessage {
            channel: self.channel,
            subject: match self.channel {
                ShareChannel::Email => Some(share_subject(record)),
                ShareChannel::Chat => None,
            },
            text: share_text(self.channel, record, breakdown),
            link: share_link(self.channel, record, breakdown),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::PaymentForm;
    use crate::payments::PaymentField;

    #[test]
    fn test_export_works_on_snapshot() {
        let mut form = PaymentForm::default();
        form.set_field(PaymentField::PropertyName, "Sala 3");
        form.set_field(PaymentField::RentValue, "700");
        let snapshot = form.snapshot();

        form.set_field(PaymentField::RentValue, "9999");
        let summary = export_snapshot(&SummaryExporter, snapshot).unwrap();

        assert!(summary.contains("TOTAL: R$\u{a0}700,00"));
    }

    #[test]
    fn test_share_message_subject_only_for_email() {
        let mut form = PaymentForm::default();
        form.set_field(PaymentField::Month, "2024-02");

        let email = export_snapshot(&ShareExporter::new(ShareChannel::Email), form.snapshot())
            .unwrap();
        let chat =
            export_snapshot(&ShareExporter::new(ShareChannel::Chat), form.snapshot()).unwrap();

        assert_eq!(
            email.subject.as_deref(),
            Some("Detalhamento de Pagamento - 2024-02")
        );
        assert!(chat.subject.is_none());
        assert!(chat.link.starts_with("https://wa.me/"));
        assert!(email.link.starts_with("mailto:"));
    }

    #[test]
    fn test_document_exporter() {
        let mut form = PaymentForm::default();
        form.set_field(PaymentField::PropertyName, "Galpão");
        let doc = export_snapshot(&DocumentExporter, form.snapshot()).unwrap();

        assert_eq!(doc.filename, "pagamento_Galpão_atual.pdf");
    }
}
