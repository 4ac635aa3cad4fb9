// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod parser;
mod view;

use clap::Parser;
use parser::{Input, ParseError, Query};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tablebook::{CoreError, ReservationBook, TransitionResult, apply};
use tablebook_domain::{
    Customer, Reservation, is_ongoing_at, is_previous, is_regular_customer, is_today, is_tomorrow,
    is_upcoming,
};
use tablebook_persistence::{
    JsonCustomerRepository, JsonReservationRepository, LedgerSync, PersistenceError,
    ReservationRepository,
};
use time::{Date, OffsetDateTime};
use tracing::info;
use view::{customer_line, reservation_list};

/// TableBook - single-user restaurant reservation tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the reservation and customer JSON files.
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,
}

/// Anything that can go wrong while handling one input line.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// The line could not be parsed into a command.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// The command violated a domain rule.
    #[error("{0}")]
    Core(#[from] CoreError),
    /// The data files could not be read or written.
    #[error("{0}")]
    Persistence(#[from] PersistenceError),
}

/// The running session: current book plus the two backing stores.
struct Session {
    book: ReservationBook,
    reservations: JsonReservationRepository,
    ledger: LedgerSync<JsonCustomerRepository>,
}

impl Session {
    /// Opens a session against the data directory, loading the book.
    fn open(data_dir: &Path) -> Result<Self, PersistenceError> {
        let reservations: JsonReservationRepository =
            JsonReservationRepository::new(data_dir.join("reservations.json"));
        let ledger: LedgerSync<JsonCustomerRepository> =
            LedgerSync::new(JsonCustomerRepository::new(data_dir.join("customers.json")));
        let book: ReservationBook = ReservationBook::from_reservations(reservations.load()?);
        Ok(Self {
            book,
            reservations,
            ledger,
        })
    }

    /// Handles one parsed input, returning the text to present.
    fn handle(&mut self, input: Input, today: Date) -> Result<String, CliError> {
        match input {
            Input::Mutate(command) => self.mutate(command),
            Input::Query(query) => Ok(self.query(&query, today)?),
            Input::Exit => Ok(String::new()),
        }
    }

    /// Runs a mutation: transition first, then persist, then adopt the new
    /// book. A failed transition leaves both files and the in-memory book
    /// untouched.
    ///
    /// The book is written before the ledger is synchronized: the ledger is
    /// a secondary index over the store, so a ledger write failure leaves it
    /// one adjustment behind the store rather than ahead of it.
    fn mutate(&mut self, command: tablebook::Command) -> Result<String, CliError> {
        let result: TransitionResult = apply(&self.book, command)?;
        self.reservations.save(result.new_book.reservations())?;
        let summary: String = format!("Done. {} reservation(s) on record.", result.new_book.len());
        self.book = result.new_book;
        if let Some(delta) = &result.ledger_delta {
            self.ledger.record(delta)?;
        }
        Ok(summary)
    }

    fn query(&self, query: &Query, today: Date) -> Result<String, PersistenceError> {
        let rendered: String = match query {
            Query::All => reservation_list(
                "All reservations:",
                &self.book.filtered(|_| true),
            ),
            Query::Today => reservation_list(
                "Today's reservations:",
                &self.book.filtered(|r| is_today(r, today)),
            ),
            Query::Tomorrow => reservation_list(
                "Tomorrow's reservations:",
                &self.book.filtered(|r| is_tomorrow(r, today)),
            ),
            Query::Previous => reservation_list(
                "Past reservations:",
                &self.book.filtered(|r| is_previous(r, today)),
            ),
            Query::Ongoing(at) => reservation_list(
                &format!("Reservations ongoing at {at}:"),
                &self.book.filtered(|r| is_ongoing_at(r, today, *at)),
            ),
            Query::Regulars => {
                let customers: Vec<Customer> = self.ledger.current()?;
                let reservations: Vec<&Reservation> = self
                    .book
                    .filtered(|r| is_regular_customer(r, &customers));
                let mut out: String = reservation_list("Regulars' reservations:", &reservations);
                let regulars: Vec<&Customer> =
                    customers.iter().filter(|c| c.is_regular()).collect();
                if !regulars.is_empty() {
                    out.push_str("\nRegular customers:");
                    for customer in regulars {
                        out.push_str("\n  ");
                        out.push_str(&customer_line(customer));
                    }
                }
                out
            }
            Query::Find(keyword) => {
                let needle: String = keyword.to_lowercase();
                let matches: Vec<&Reservation> = self.book.filtered(|r| {
                    is_upcoming(r, today)
                        && (r.name().value().to_lowercase().contains(&needle)
                            || r.phone().value().contains(&needle))
                });
                reservation_list(&format!("Upcoming reservations matching '{keyword}':"), &matches)
            }
        };
        Ok(rendered)
    }
}

/// The reference date for temporal queries: the local calendar day, or the
/// UTC day when the local offset cannot be determined.
fn today() -> Date {
    OffsetDateTime::now_local().map_or_else(|_| OffsetDateTime::now_utc().date(), |now| now.date())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session: Session = Session::open(&args.data_dir)?;
    info!(
        reservations = session.book.len(),
        data_dir = %args.data_dir.display(),
        "session opened"
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    println!("TableBook ready. Type a command, or 'exit' to quit.");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line: String = String::new();
        // EOF ends the session the same way 'exit' does.
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parser::parse(&line) {
            Ok(Input::Exit) => break,
            Ok(input) => match session.handle(input, today()) {
                Ok(output) => println!("{output}"),
                Err(err) => println!("Error: {err}"),
            },
            Err(err) => println!("Error: {err}"),
        }
    }

    info!("session closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tablebook::Command;
    use tablebook_domain::{
        Duration, Name, Pax, Phone, Remark, StartDate, StartTime, Table,
    };
    use tempfile::TempDir;
    use time::Month;

    fn sample_reservation() -> Reservation {
        Reservation::new(
            Name::new("Alice").unwrap(),
            Phone::new("94351253").unwrap(),
            StartDate::new("21/03/2026").unwrap(),
            StartTime::new("1800").unwrap(),
            Duration::new("2").unwrap(),
            Pax::new("4").unwrap(),
            Table::new("A1").unwrap(),
            Remark::default(),
            Vec::new(),
        )
    }

    fn reference_date() -> Date {
        Date::from_calendar_date(2026, Month::March, 21).unwrap()
    }

    #[test]
    fn test_session_round_trip_through_files() {
        let dir: TempDir = TempDir::new().unwrap();
        let data_dir: PathBuf = dir.path().to_path_buf();

        let mut session: Session = Session::open(&data_dir).unwrap();
        let output: String = session
            .handle(
                Input::Mutate(Command::Add {
                    reservation: sample_reservation(),
                }),
                reference_date(),
            )
            .unwrap();
        assert!(output.contains("1 reservation(s)"));

        // A fresh session sees the persisted book and ledger.
        let reopened: Session = Session::open(&data_dir).unwrap();
        assert_eq!(reopened.book.len(), 1);
        let customers: Vec<Customer> = reopened.ledger.current().unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].booking_count(), 1);
    }

    #[test]
    fn test_failed_mutation_leaves_files_untouched() {
        let dir: TempDir = TempDir::new().unwrap();
        let data_dir: PathBuf = dir.path().to_path_buf();

        let mut session: Session = Session::open(&data_dir).unwrap();
        session
            .handle(
                Input::Mutate(Command::Add {
                    reservation: sample_reservation(),
                }),
                reference_date(),
            )
            .unwrap();

        // Same name is the same reservation; adding it again must fail.
        let err: CliError = session
            .handle(
                Input::Mutate(Command::Add {
                    reservation: sample_reservation(),
                }),
                reference_date(),
            )
            .unwrap_err();
        assert!(matches!(err, CliError::Core(_)));

        let reopened: Session = Session::open(&data_dir).unwrap();
        assert_eq!(reopened.book.len(), 1);
    }

    #[test]
    fn test_ledger_failure_leaves_book_persisted_not_ahead() {
        let dir: TempDir = TempDir::new().unwrap();
        let data_dir: PathBuf = dir.path().to_path_buf();
        // A directory where the ledger file belongs makes every customer
        // load and save fail while the reservation file stays writable.
        std::fs::create_dir_all(data_dir.join("customers.json")).unwrap();

        let mut session: Session = Session::open(&data_dir).unwrap();
        let err: CliError = session
            .handle(
                Input::Mutate(Command::Add {
                    reservation: sample_reservation(),
                }),
                reference_date(),
            )
            .unwrap_err();
        assert!(matches!(err, CliError::Persistence(_)));

        // The store write happened before the ledger sync failed: the book
        // is on disk and in memory, the ledger is behind, never ahead.
        assert_eq!(session.book.len(), 1);
        let reopened: Session = Session::open(&data_dir).unwrap();
        assert_eq!(reopened.book.len(), 1);
    }

    #[test]
    fn test_query_today_renders_matches() {
        let dir: TempDir = TempDir::new().unwrap();
        let data_dir: PathBuf = dir.path().to_path_buf();

        let mut session: Session = Session::open(&data_dir).unwrap();
        session
            .handle(
                Input::Mutate(Command::Add {
                    reservation: sample_reservation(),
                }),
                reference_date(),
            )
            .unwrap();

        let output: String = session
            .handle(Input::Query(Query::Today), reference_date())
            .unwrap();
        assert!(output.contains("Alice"));

        let empty: String = session
            .handle(
                Input::Query(Query::Today),
                Date::from_calendar_date(2026, Month::April, 1).unwrap(),
            )
            .unwrap();
        assert!(empty.contains("(no reservations)"));
    }

    #[test]
    fn test_find_is_case_insensitive_and_upcoming_only() {
        let dir: TempDir = TempDir::new().unwrap();
        let data_dir: PathBuf = dir.path().to_path_buf();

        let mut session: Session = Session::open(&data_dir).unwrap();
        session
            .handle(
                Input::Mutate(Command::Add {
                    reservation: sample_reservation(),
                }),
                reference_date(),
            )
            .unwrap();

        let hit: String = session
            .handle(
                Input::Query(Query::Find(String::from("alice"))),
                reference_date(),
            )
            .unwrap();
        assert!(hit.contains("Alice"));

        // The day after, the reservation is no longer upcoming.
        let miss: String = session
            .handle(
                Input::Query(Query::Find(String::from("alice"))),
                Date::from_calendar_date(2026, Month::March, 22).unwrap(),
            )
            .unwrap();
        assert!(miss.contains("(no reservations)"));
    }
}
