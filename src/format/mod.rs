//! Output formatting for cost breakdowns and rates (table, JSON, markdown, CSV).

use crate::calc::CostBreakdown;
use crate::config::OutputFormat;
use crate::nbp::RateQuote;

/// Formats calculator output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a cost breakdown.
    pub fn format_breakdown(&self, breakdown: &CostBreakdown) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(breakdown).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => self.table_breakdown(breakdown),
            OutputFormat::Markdown => self.markdown_breakdown(breakdown),
            OutputFormat::Csv => self.csv_breakdown(breakdown),
        }
    }

    /// Formats a list of fetched rates.
    pub fn format_rates(&self, rates: &[RateQuote]) -> String {
        if rates.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => rates_csv_header(),
                _ => "No rates fetched.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(rates).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Table => self.table_rates(rates),
            OutputFormat::Markdown => self.markdown_rates(rates),
            OutputFormat::Csv => self.csv_rates(rates),
        }
    }

    // Table formatting

    fn table_breakdown(&self, b: &CostBreakdown) -> String {
        let mut lines = Vec::new();

        lines.push(b.route.label().to_string());
        lines.push("=".repeat(52));
        lines.push(banner(b));
        lines.push(String::new());

        lines.push(format!(
            "Cena pojazdu:        {}{:.2} = {:.2} PLN",
            b.currency.symbol(),
            b.vehicle_price,
            b.vehicle_pln
        ));
        lines.push(format!("Transport:           {:.2} PLN", b.shipping_pln));
        lines.push(format!("Wartość celna:       {:.2} PLN", b.customs_value_pln));
        lines.push(format!("Cło ({:.0}%):            {:.2} PLN", b.duty_rate * 100.0, b.duty_pln));
        lines.push(format!(
            "Akcyza ({:.1}%, {} cm³): {:.2} PLN",
            b.excise_rate * 100.0,
            b.engine_cc,
            b.excise_pln
        ));
        lines.push(format!("VAT (23%):           {:.2} PLN", b.vat_pln));
        lines.push(format!("Agencja celna:       {:.2} PLN", b.agency_pln));
        lines.push(format!("Tłumaczenia:         {:.2} PLN", b.translation_pln));
        lines.push(format!("Przegląd:            {:.2} PLN", b.inspection_pln));
        lines.push(format!("Rejestracja:         {:.2} PLN", b.registration_pln));

        lines.push("-".repeat(52));
        lines.push(format!("RAZEM:               {:.2} PLN", b.total_pln));

        lines.join("\n")
    }

    fn table_rates(&self, rates: &[RateQuote]) -> String {
        let mut lines = Vec::new();

        lines.push(format!("{:<6} {:<12} {:<12} {:<20}", "Code", "Mid (PLN)", "Date", "Table"));
        lines.push(format!("{:-<6} {:-<12} {:-<12} {:-<20}", "", "", "", ""));

        for r in rates {
            lines.push(format!(
                "{:<6} {:<12} {:<12} {:<20}",
                r.currency.code(),
                format!("{:.4}", r.mid),
                r.effective_date,
                r.table_no
            ));
        }

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_breakdown(&self, b: &CostBreakdown) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", b.route.label()));
        lines.push(String::new());
        lines.push(format!("*{}*", banner(b)));
        lines.push(String::new());

        lines.push("| Pozycja | Kwota (PLN) |".to_string());
        lines.push("|---------|-------------|".to_string());

        lines.push(format!(
            "| Cena pojazdu ({}{:.2}) | {:.2} |",
            b.currency.symbol(),
            b.vehicle_price,
            b.vehicle_pln
        ));
        lines.push(format!("| Transport | {:.2} |", b.shipping_pln));
        lines.push(format!("| Cło ({:.0}%) | {:.2} |", b.duty_rate * 100.0, b.duty_pln));
        lines.push(format!(
            "| Akcyza ({:.1}%, {} cm³) | {:.2} |",
            b.excise_rate * 100.0,
            b.engine_cc,
            b.excise_pln
        ));
        lines.push(format!("| VAT (23%) | {:.2} |", b.vat_pln));
        lines.push(format!("| Agencja celna | {:.2} |", b.agency_pln));
        lines.push(format!("| Tłumaczenia | {:.2} |", b.translation_pln));
        lines.push(format!("| Przegląd | {:.2} |", b.inspection_pln));
        lines.push(format!("| Rejestracja | {:.2} |", b.registration_pln));
        lines.push(format!("| **RAZEM** | **{:.2}** |", b.total_pln));

        lines.join("\n")
    }

    fn markdown_rates(&self, rates: &[RateQuote]) -> String {
        let mut lines = Vec::new();

        lines.push("| Code | Mid (PLN) | Date | Table |".to_string());
        lines.push("|------|-----------|------|-------|".to_string());

        for r in rates {
            lines.push(format!(
                "| {} | {:.4} | {} | {} |",
                r.currency.code(),
                r.mid,
                r.effective_date,
                r.table_no
            ));
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv_breakdown(&self, b: &CostBreakdown) -> String {
        let mut lines = Vec::new();
        lines.push("item,amount_pln".to_string());

        lines.push(format!("vehicle,{:.2}", b.vehicle_pln));
        lines.push(format!("shipping,{:.2}", b.shipping_pln));
        lines.push(format!("duty,{:.2}", b.duty_pln));
        lines.push(format!("excise,{:.2}", b.excise_pln));
        lines.push(format!("vat,{:.2}", b.vat_pln));
        lines.push(format!("agency,{:.2}", b.agency_pln));
        lines.push(format!("translation,{:.2}", b.translation_pln));
        lines.push(format!("inspection,{:.2}", b.inspection_pln));
        lines.push(format!("registration,{:.2}", b.registration_pln));
        lines.push(format!("total,{:.2}", b.total_pln));

        lines.join("\n")
    }

    fn csv_rates(&self, rates: &[RateQuote]) -> String {
        let mut lines = Vec::new();
        lines.push(rates_csv_header());

        for r in rates {
            lines.push(format!(
                "{},{:.4},{},{}",
                r.currency.code(),
                r.mid,
                r.effective_date,
                r.table_no
            ));
        }

        lines.join("\n")
    }
}

/// Renders the rates banner line, mid rates to four decimal places.
fn banner(b: &CostBreakdown) -> String {
    format!("Aktualne kursy NBP: {}, {}", b.source_rate.banner_line(), b.eur_rate.banner_line())
}

fn rates_csv_header() -> String {
    "code,mid,effective_date,table_no".to_string()
}
