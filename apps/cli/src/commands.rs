//! Command handlers. Each one writes its normal output to `out`; notices and
//! logs go to stderr.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rentslip_core::constants::PROPERTY_NOT_SPECIFIED;
use rentslip_core::export::{
    export_snapshot, DocumentExporter, ShareExporter, SummaryExporter,
};
use rentslip_core::history::HistoryEntry;
use rentslip_core::payments::{PaymentForm, PaymentRecord};
use rentslip_core::utils::{format_currency, format_date_short, format_month_long};

use crate::cli::{Commands, ExportArgs, HistoryCommand, RecordArgs, ShareArgs};
use crate::main_lib::AppState;

pub fn run<W: Write>(state: &AppState, command: Commands, out: &mut W) -> anyhow::Result<()> {
    match command {
        Commands::Summary(args) => summary(state, args, out),
        Commands::Share(args) => share(state, args, out),
        Commands::Export(args) => export(state, args, out).map(|_| ()),
        Commands::History(cmd) => history(state, cmd, out),
    }
}

/// Builds the form for a command: a saved snapshot or a blank current-month
/// record, with the flags applied on top.
fn load_form(state: &AppState, args: RecordArgs) -> anyhow::Result<PaymentForm> {
    let base = match args.from_history.as_deref() {
        Some(id) => state.history_service.get(id)?.payment_data,
        None => PaymentRecord::for_current_month(),
    };
    Ok(args.into_form(base))
}

fn summary<W: Write>(state: &AppState, args: RecordArgs, out: &mut W) -> anyhow::Result<()> {
    let form = load_form(state, args)?;
    let text = export_snapshot(&SummaryExporter, form.snapshot())?;
    writeln!(out, "{}", text)?;
    Ok(())
}

fn share<W: Write>(state: &AppState, args: ShareArgs, out: &mut W) -> anyhow::Result<()> {
    let form = load_form(state, args.record)?;
    let message = export_snapshot(&ShareExporter::new(args.channel), form.snapshot())?;
    tracing::info!("Share message built for {}", message.channel);

    if args.link {
        writeln!(out, "{}", message.link)?;
        return Ok(());
    }
    if let Some(subject) = &message.subject {
        writeln!(out, "Assunto: {}", subject)?;
        writeln!(out)?;
    }
    writeln!(out, "{}", message.text)?;
    writeln!(out)?;
    writeln!(out, "{}", message.link)?;
    Ok(())
}

/// Writes `<stem>.html` and returns its path.
fn export<W: Write>(state: &AppState, args: ExportArgs, out: &mut W) -> anyhow::Result<PathBuf> {
    let form = load_form(state, args.record)?;
    let document = export_snapshot(&DocumentExporter, form.snapshot())?;

    let dir = args
        .out_dir
        .unwrap_or_else(|| state.config.export_dir.clone());
    let path = write_document(&dir, document.file_stem(), &document.html)?;
    tracing::info!("Payment document written to {}", path.display());

    writeln!(out, "{}", path.display())?;
    Ok(path)
}

fn write_document(dir: &Path, stem: &str, html: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    let path = dir.join(format!("{}.html", stem));
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn history<W: Write>(state: &AppState, cmd: HistoryCommand, out: &mut W) -> anyhow::Result<()> {
    match cmd {
        HistoryCommand::List { json } => {
            let entries = state.history_service.list()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
            } else if entries.is_empty() {
                writeln!(out, "Nenhum pagamento salvo.")?;
            } else {
                for entry in &entries {
                    writeln!(out, "{}", history_line(entry))?;
                }
            }
        }
        HistoryCommand::Save(args) => {
            let form = load_form(state, args)?;
            match state.history_service.save(&form.snapshot()) {
                Ok(entry) => {
                    writeln!(out, "Pagamento salvo no histórico: {}", entry.id)?;
                }
                // Refusal is a notice, not a failure; nothing is written.
                Err(e) if e.is_user_facing() => {
                    eprintln!("{}", e);
                }
                Err(e) => return Err(e.into()),
            }
        }
        HistoryCommand::Show { id } => {
            let entry = state.history_service.get(&id)?;
            let text = export_snapshot(&SummaryExporter, entry.payment_data)?;
            writeln!(out, "{}", text)?;
        }
        HistoryCommand::Delete { id } => {
            if state.history_service.remove(&id)? {
                writeln!(out, "Pagamento removido: {}", id)?;
            } else {
                eprintln!("Nenhum pagamento com id {}", id);
            }
        }
    }
    Ok(())
}

fn history_line(entry: &HistoryEntry) -> String {
    let record = &entry.payment_data;
    let property = if record.property_name.trim().is_empty() {
        PROPERTY_NOT_SPECIFIED
    } else {
        record.property_name.as_str()
    };
    let date = format_date_short(&entry.date.with_timezone(&chrono::Local));

    let mut line = format!("{}  {}  {}", entry.id, property, date);
    if !record.tenant_name.trim().is_empty() {
        line.push_str(&format!("  Locatário: {}", record.tenant_name));
    }
    line.push_str(&format!(
        "  {}  {}",
        format_month_long(&record.month),
        format_currency(entry.total)
    ));
    line
}
