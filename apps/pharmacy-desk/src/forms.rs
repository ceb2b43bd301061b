//! # Terminal Forms
//!
//! A line-oriented front end over the command layer.
//!
//! ## Page Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu ──► "1" ──► Add Customer page                                    │
//! │    ▲                 │ prompt Name, Phone, Address                      │
//! │    │                 ▼                                                  │
//! │    │            AddCustomerInput (fresh each time)                      │
//! │    │                 │                                                  │
//! │    │                 ▼                                                  │
//! │    │            commands::add_customer                                  │
//! │    │                 │                                                  │
//! │    │                 ├── Ok  ──► "Customer added successfully"          │
//! │    │                 └── Err ──► "Error: <message>"                     │
//! │    │                 │                                                  │
//! │    └─────────────────┘                                                  │
//! │                                                                         │
//! │  "6" / "quit" ends the session. So does end of input, on any prompt.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A number that does not parse abandons the page; nothing is submitted.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::commands::{
    self, AddCustomerInput, AddMedicineInput, AddStockInput, DataView, MakeSaleInput,
    ViewDataInput,
};
use crate::error::ApiError;
use crate::state::{ConfigState, DbState, ViewFormat};
use pharmacy_core::RecordKind;

/// Entries of the navigation menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCustomer,
    AddMedicine,
    AddStock,
    MakeSale,
    ViewData,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddCustomer,
        MenuChoice::AddMedicine,
        MenuChoice::AddStock,
        MenuChoice::MakeSale,
        MenuChoice::ViewData,
        MenuChoice::Quit,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddCustomer => "Add Customer",
            MenuChoice::AddMedicine => "Add Medicine",
            MenuChoice::AddStock => "Add Stock",
            MenuChoice::MakeSale => "Make Sale",
            MenuChoice::ViewData => "View Data",
            MenuChoice::Quit => "Quit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    /// Accepts the 1-based position or the label in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(index) = s.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| MenuChoice::ALL.get(i).copied())
                .ok_or(());
        }

        MenuChoice::ALL
            .iter()
            .copied()
            .find(|choice| choice.label().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// How a page ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageOutcome {
    /// Back to the menu
    Done,
    /// Input ran out
    Closed,
}

/// One interactive session over a reader and a writer.
pub struct FormSession<'a, R, W> {
    input: R,
    output: W,
    db: &'a DbState,
    config: &'a ConfigState,
}

impl<'a, R: BufRead, W: Write> FormSession<'a, R, W> {
    pub fn new(input: R, output: W, db: &'a DbState, config: &'a ConfigState) -> Self {
        FormSession {
            input,
            output,
            db,
            config,
        }
    }

    /// Shows the menu and runs pages until Quit or end of input.
    ///
    /// Command failures are printed and the menu comes back. Only IO errors
    /// on the reader or writer end the session with an error.
    pub async fn run(&mut self) -> io::Result<()> {
        info!("Form session started");

        loop {
            self.print_menu()?;

            let Some(line) = self.prompt(">")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let Ok(choice) = line.parse::<MenuChoice>() else {
                writeln!(self.output, "Unknown choice: {}", line.trim())?;
                continue;
            };
            debug!(?choice, "Menu choice");

            let outcome = match choice {
                MenuChoice::AddCustomer => self.add_customer_page().await?,
                MenuChoice::AddMedicine => self.add_medicine_page().await?,
                MenuChoice::AddStock => self.add_stock_page().await?,
                MenuChoice::MakeSale => self.make_sale_page().await?,
                MenuChoice::ViewData => self.view_data_page().await?,
                MenuChoice::Quit => break,
            };

            if outcome == PageOutcome::Closed {
                break;
            }
        }

        writeln!(self.output, "Goodbye")?;
        self.output.flush()?;
        info!("Form session ended");
        Ok(())
    }

    // =========================================================================
    // Pages
    // =========================================================================

    async fn add_customer_page(&mut self) -> io::Result<PageOutcome> {
        let Some(name) = self.prompt("Name:")? else {
            return Ok(PageOutcome::Closed);
        };
        let Some(phone) = self.prompt("Phone:")? else {
            return Ok(PageOutcome::Closed);
        };
        let Some(address) = self.prompt("Address:")? else {
            return Ok(PageOutcome::Closed);
        };

        let input = AddCustomerInput {
            name,
            phone,
            address,
        };
        match commands::add_customer(self.db, input).await {
            Ok(customer) => writeln!(
                self.output,
                "Customer added successfully (id {})",
                customer.id
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(PageOutcome::Done)
    }

    async fn add_medicine_page(&mut self) -> io::Result<PageOutcome> {
        let Some(name) = self.prompt("Name:")? else {
            return Ok(PageOutcome::Closed);
        };
        let Some(manufacturer) = self.prompt("Manufacturer:")? else {
            return Ok(PageOutcome::Closed);
        };
        let Some(raw_price) = self.prompt("Price:")? else {
            return Ok(PageOutcome::Closed);
        };
        let Some(price) = self.number::<f64>("Price", &raw_price)? else {
            return Ok(PageOutcome::Done);
        };

        let input = AddMedicineInput {
            name,
            manufacturer,
            price,
        };
        match commands::add_medicine(self.db, input).await {
            Ok(medicine) => writeln!(
                self.output,
                "Medicine added successfully (id {}, {})",
                medicine.id,
                self.config.format_price(medicine.price)
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(PageOutcome::Done)
    }

    async fn add_stock_page(&mut self) -> io::Result<PageOutcome> {
        let Some(raw_medicine) = self.prompt("Medicine ID:")? else {
            return Ok(PageOutcome::Closed);
        };
        let Some(medicine_id) = self.number::<i64>("Medicine ID", &raw_medicine)? else {
            return Ok(PageOutcome::Done);
        };
        let Some(raw_quantity) = self.prompt("Quantity:")? else {
            return Ok(PageOutcome::Closed);
        };
        let Some(quantity) = self.number::<i64>("Quantity", &raw_quantity)? else {
            return Ok(PageOutcome::Done);
        };

        let input = AddStockInput {
            medicine_id,
            quantity,
        };
        match commands::add_stock(self.db, input).await {
            Ok(entry) => writeln!(self.output, "Stock added successfully (id {})", entry.id)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(PageOutcome::Done)
    }

    async fn make_sale_page(&mut self) -> io::Result<PageOutcome> {
        let Some(raw_customer) = self.prompt("Customer ID:")? else {
            return Ok(PageOutcome::Closed);
        };
        let Some(customer_id) = self.number::<i64>("Customer ID", &raw_customer)? else {
            return Ok(PageOutcome::Done);
        };
        let Some(raw_medicine) = self.prompt("Medicine ID:")? else {
            return Ok(PageOutcome::Closed);
        };
        let Some(medicine_id) = self.number::<i64>("Medicine ID", &raw_medicine)? else {
            return Ok(PageOutcome::Done);
        };
        let Some(raw_quantity) = self.prompt("Quantity:")? else {
            return Ok(PageOutcome::Closed);
        };
        let Some(quantity) = self.number::<i64>("Quantity", &raw_quantity)? else {
            return Ok(PageOutcome::Done);
        };

        let input = MakeSaleInput {
            customer_id,
            medicine_id,
            quantity,
        };
        match commands::make_sale(self.db, input).await {
            Ok(sale) => writeln!(
                self.output,
                "Sale recorded successfully (id {}, {})",
                sale.id, sale.sale_date
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(PageOutcome::Done)
    }

    async fn view_data_page(&mut self) -> io::Result<PageOutcome> {
        let options = RecordKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| format!("{}) {}", i + 1, kind))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(self.output, "{}", options)?;

        let Some(raw_kind) = self.prompt("Table:")? else {
            return Ok(PageOutcome::Closed);
        };
        let kind = match raw_kind.parse::<RecordKind>() {
            Ok(kind) => kind,
            Err(e) => {
                self.report_error(&ApiError::from(e))?;
                return Ok(PageOutcome::Done);
            }
        };

        match commands::view_data(self.db, ViewDataInput { kind }).await {
            Ok(view) => self.print_view(&view)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(PageOutcome::Done)
    }

    // =========================================================================
    // Output
    // =========================================================================

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Pharmacy Records ===")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn print_view(&mut self, view: &DataView) -> io::Result<()> {
        writeln!(self.output, "== {} ({}) ==", view.kind(), view.len())?;

        if view.is_empty() {
            writeln!(self.output, "No records")?;
            return Ok(());
        }

        if self.config.view_format == ViewFormat::Json {
            for row in view.json_rows()? {
                writeln!(self.output, "{}", row)?;
            }
            return Ok(());
        }

        match view {
            DataView::Customers(rows) => {
                for c in rows {
                    writeln!(
                        self.output,
                        "{:>4}  {}  {}  {}",
                        c.id,
                        c.name,
                        c.phone.as_deref().unwrap_or("-"),
                        c.address.as_deref().unwrap_or("-")
                    )?;
                }
            }
            DataView::Medicines(rows) => {
                for m in rows {
                    writeln!(
                        self.output,
                        "{:>4}  {}  {}  {}",
                        m.id,
                        m.name,
                        m.manufacturer.as_deref().unwrap_or("-"),
                        self.config.format_price(m.price)
                    )?;
                }
            }
            DataView::Stock(rows) => {
                for s in rows {
                    writeln!(
                        self.output,
                        "{:>4}  medicine {}  qty {}",
                        s.id, s.medicine_id, s.quantity
                    )?;
                }
            }
            DataView::Sales(rows) => {
                for s in rows {
                    writeln!(
                        self.output,
                        "{:>4}  customer {}  medicine {}  qty {}  {}",
                        s.id, s.customer_id, s.medicine_id, s.quantity, s.sale_date
                    )?;
                }
            }
        }
        Ok(())
    }

    fn report_error(&mut self, err: &ApiError) -> io::Result<()> {
        debug!(code = ?err.code, message = %err.message, "Command failed");
        writeln!(self.output, "Error: {}", err.message)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Prints `label` and reads one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Parses a numeric field, reporting failures to the user.
    fn number<T>(&mut self, field: &str, raw: &str) -> io::Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        match raw.trim().parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!(field, raw, error = %e, "Unparseable number");
                writeln!(self.output, "Invalid number for {}: '{}'", field, raw.trim())?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::memory_db;
    use std::io::Cursor;

    async fn run_session(db: &DbState, config: &ConfigState, script: &str) -> String {
        let mut out = Vec::new();
        FormSession::new(Cursor::new(script.as_bytes()), &mut out, db, config)
            .run()
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::AddCustomer));
        assert_eq!(" make sale ".parse::<MenuChoice>(), Ok(MenuChoice::MakeSale));
        assert_eq!("6".parse::<MenuChoice>(), Ok(MenuChoice::Quit));
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("7".parse::<MenuChoice>().is_err());
    }

    #[tokio::test]
    async fn test_full_walkthrough() {
        let db = memory_db().await;
        let config = ConfigState::default();
        let script = "1\nJane Doe\n555-0100\n1 Elm St\n\
                      2\nAspirin\nBayer\n5.00\n\
                      3\n1\n100\n\
                      4\n1\n1\n10\n\
                      5\nStock\n\
                      5\nmedicines\n\
                      6\n";

        let out = run_session(&db, &config, script).await;

        assert!(out.contains("Customer added successfully (id 1)"));
        assert!(out.contains("Medicine added successfully (id 1, $5.00)"));
        assert!(out.contains("Stock added successfully (id 1)"));
        assert!(out.contains("Sale recorded successfully (id 1,"));
        assert!(out.contains("== Stock (1) =="));
        assert!(out.contains("   1  medicine 1  qty 90"));
        assert!(out.contains("   1  Aspirin  Bayer  $5.00"));
        assert!(out.ends_with("Goodbye\n"));
    }

    #[tokio::test]
    async fn test_bad_number_abandons_page() {
        let db = memory_db().await;
        let config = ConfigState::default();

        let out = run_session(&db, &config, "3\n1\nten\n6\n").await;

        assert!(out.contains("Invalid number for Quantity: 'ten'"));
        assert!(!out.contains("Stock added successfully"));
        assert!(db.inner().stock().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_validation_error_is_shown_and_menu_returns() {
        let db = memory_db().await;
        let config = ConfigState::default();

        let out = run_session(&db, &config, "1\nJane\n\n1 Elm St\n6\n").await;

        assert!(out.contains("Error: phone is required"));
        assert_eq!(out.matches("=== Pharmacy Records ===").count(), 2);
        assert!(db.inner().customers().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sale_without_stock_is_recorded() {
        let db = memory_db().await;
        let config = ConfigState::default();

        let out = run_session(&db, &config, "4\n1\n1\n2\n5\nstock\n").await;

        assert!(out.contains("Sale recorded successfully (id 1,"));
        assert!(out.contains("   1  medicine 1  qty -2"));
        assert_eq!(db.inner().sales().list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_oversized_sale_keeps_stock_listable() {
        let db = memory_db().await;
        let config = ConfigState::default();

        let script = format!("3\n1\n0\n4\n1\n1\n{}\n4\n1\n1\n2\n5\nstock\n", i64::MAX);
        let out = run_session(&db, &config, &script).await;

        assert!(out.contains("Error: quantity must be between 1 and 2147483647"));
        assert!(out.contains("   1  medicine 1  qty -2"));
        assert_eq!(db.inner().stock().total_for_medicine(1).await.unwrap(), -2);
    }

    #[tokio::test]
    async fn test_end_of_input_mid_page_ends_session() {
        let db = memory_db().await;
        let config = ConfigState::default();

        let out = run_session(&db, &config, "1\nJane Doe\n").await;

        assert!(out.ends_with("Goodbye\n"));
        assert!(db.inner().customers().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_choices() {
        let db = memory_db().await;
        let config = ConfigState::default();

        let out = run_session(&db, &config, "9\n5\nPharmacists\nquit\n").await;

        assert!(out.contains("Unknown choice: 9"));
        assert!(out.contains("Error: Unknown data kind 'Pharmacists'"));
    }

    #[tokio::test]
    async fn test_empty_view_and_json_format() {
        let db = memory_db().await;
        let config = ConfigState {
            view_format: ViewFormat::Json,
            ..ConfigState::default()
        };

        let out = run_session(&db, &config, "5\n4\n3\n2\n7\n5\n3\n").await;

        assert!(out.contains("== Sales (0) ==\nNo records"));
        assert!(out.contains(r#"{"id":1,"medicine_id":2,"quantity":7}"#));
    }
}
