//! Command line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rentslip_core::export::ShareChannel;
use rentslip_core::payments::{PaymentField, PaymentForm, PaymentRecord};

/// Monthly rent payment breakdowns: summary, history, export and share.
#[derive(Parser, Debug)]
#[command(name = "rentslip", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the payment summary.
    Summary(RecordArgs),
    /// Print a share message or link.
    Share(ShareArgs),
    /// Write the printable payment document.
    Export(ExportArgs),
    /// Saved payments.
    #[command(subcommand)]
    History(HistoryCommand),
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List saved payments, most recent first.
    List {
        /// Print the raw entries as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Save the payment to the history.
    Save(RecordArgs),
    /// Load a saved payment and print its summary.
    Show { id: String },
    /// Delete a saved payment.
    Delete { id: String },
}

#[derive(Args, Debug)]
pub struct ShareArgs {
    /// chat (WhatsApp) or email.
    #[arg(value_parser = parse_channel)]
    pub channel: ShareChannel,
    /// Print only the link.
    #[arg(long)]
    pub link: bool,
    #[command(flatten)]
    pub record: RecordArgs,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory to write into; defaults to RENTSLIP_EXPORT_DIR.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    #[command(flatten)]
    pub record: RecordArgs,
}

/// Form fields. Amounts are taken as typed: blank or unparsable text counts
/// as 0 and negative amounts are clamped to 0.
#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    /// Start from a saved payment, then apply the other flags.
    #[arg(long, value_name = "ID")]
    pub from_history: Option<String>,
    #[arg(long)]
    pub property: Option<String>,
    #[arg(long)]
    pub tenant: Option<String>,
    /// Reference month, YYYY-MM. Defaults to the current month.
    #[arg(long)]
    pub month: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub rent: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub condo: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub water: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub electricity: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub property_tax: Option<String>,
    /// The property tax amount is annual and is spread over 12 months.
    #[arg(long, conflicts_with = "monthly_tax")]
    pub annual_tax: bool,
    /// The property tax amount is monthly (the default for new payments).
    #[arg(long)]
    pub monthly_tax: bool,
    #[arg(long, allow_hyphen_values = true)]
    pub management_fee: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub other: Option<String>,
    #[arg(long)]
    pub other_description: Option<String>,
}

impl RecordArgs {
    /// Applies the given flags on top of `base`.
    pub fn into_form(self, base: PaymentRecord) -> PaymentForm {
        let mut form = PaymentForm::new(base);

        let edits = [
            (PaymentField::PropertyName, self.property),
            (PaymentField::TenantName, self.tenant),
            (PaymentField::Month, self.month),
            (PaymentField::RentValue, self.rent),
            (PaymentField::CondoFee, self.condo),
            (PaymentField::WaterFee, self.water),
            (PaymentField::ElectricityBill, self.electricity),
            (PaymentField::PropertyTax, self.property_tax),
            (PaymentField::ManagementFee, self.management_fee),
            (PaymentField::OtherExpenses, self.other),
            (PaymentField::OtherExpensesDescription, self.other_description),
        ];
        for (field, value) in edits {
            if let Some(raw) = value {
                form.set_field(field, &raw);
            }
        }

        if self.annual_tax {
            form.set_property_tax_monthly(false);
        } else if self.monthly_tax {
            form.set_property_tax_monthly(true);
        }

        form
    }
}

fn parse_channel(raw: &str) -> Result<ShareChannel, String> {
    raw.parse::<ShareChannel>().map_err(|e| e.to_string())
}
