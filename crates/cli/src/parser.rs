// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line-oriented command parser.
//!
//! Commands are a word followed by prefixed fields (`n/`, `p/`, `d/`,
//! `t/`, `dur/`, `pax/`, `tab/`, `r/`, `tag/`). Field values may contain
//! spaces; a new field starts at the next recognized prefix. Parsing only
//! tokenizes and runs the value-type grammars — every domain rule
//! (uniqueness, existence, payment state) stays with the core.

use tablebook::Command;
use tablebook_domain::{
    DomainError, Duration, Identification, Name, Pax, Phone, Remark, Reservation,
    ReservationPatch, StartDate, StartTime, Table, Tag,
};
use thiserror::Error;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A state-changing command for the core.
    Mutate(Command),
    /// A read-only query over the current book.
    Query(Query),
    /// Terminate the session.
    Exit,
}

/// A read-only view request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every reservation.
    All,
    /// Reservations on the reference date.
    Today,
    /// Reservations on the day after the reference date.
    Tomorrow,
    /// Reservations strictly before the reference date.
    Previous,
    /// Reservations belonging to regular customers.
    Regulars,
    /// Reservations in progress at the given time today.
    Ongoing(StartTime),
    /// Upcoming reservations whose name or phone contains the keyword.
    Find(String),
}

/// Errors produced while parsing an input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line was empty.
    #[error("Empty input")]
    Empty,
    /// The leading word is not a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    /// A required field was not supplied.
    #[error("Missing required field {0}")]
    MissingField(&'static str),
    /// A single-valued field was supplied twice.
    #[error("Duplicate field {0}")]
    DuplicateField(&'static str),
    /// A token appeared where a prefixed field was expected.
    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
    /// A field value failed its grammar.
    #[error("{0}")]
    Validation(#[from] DomainError),
}

/// Parses one input line.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found.
pub fn parse(line: &str) -> Result<Input, ParseError> {
    let mut tokens = line.split_whitespace();
    let word: &str = tokens.next().ok_or(ParseError::Empty)?;
    let rest: Vec<&str> = tokens.collect();

    match word {
        "add" => parse_add(&rest),
        "edit" => parse_edit(&rest),
        "delete" => parse_target(&rest, |target| Command::Delete { target }),
        "mark" => parse_target(&rest, |target| Command::MarkPaid { target }),
        "unmark" => parse_target(&rest, |target| Command::UnmarkPaid { target }),
        "remark" => parse_remark(&rest),
        "list" => parse_list(&rest),
        "ongoing" => parse_ongoing(&rest),
        "find" => parse_find(&rest),
        "exit" => Ok(Input::Exit),
        other => Err(ParseError::UnknownCommand(String::from(other))),
    }
}

/// Field prefixes, longest first so `tab/` and `tag/` win over `t/`.
const PREFIXES: [&str; 9] = [
    "tag/", "tab/", "dur/", "pax/", "n/", "p/", "d/", "t/", "r/",
];

/// Tokenized fields: prefix paired with its (possibly multi-word) value.
struct Fields {
    values: Vec<(&'static str, String)>,
}

impl Fields {
    fn tokenize(tokens: &[&str]) -> Result<Self, ParseError> {
        let mut values: Vec<(&'static str, String)> = Vec::new();
        for token in tokens {
            if let Some((prefix, start)) = PREFIXES
                .iter()
                .find_map(|p| token.strip_prefix(p).map(|rest| (*p, rest)))
            {
                values.push((prefix, String::from(start)));
            } else if let Some((_, value)) = values.last_mut() {
                // Continuation of the previous field's value.
                value.push(' ');
                value.push_str(token);
            } else {
                return Err(ParseError::UnexpectedArgument(String::from(*token)));
            }
        }
        Ok(Self { values })
    }

    fn single(&self, prefix: &'static str) -> Result<Option<&str>, ParseError> {
        let mut found: Option<&str> = None;
        for (p, value) in &self.values {
            if *p == prefix {
                if found.is_some() {
                    return Err(ParseError::DuplicateField(prefix));
                }
                found = Some(value.as_str());
            }
        }
        Ok(found)
    }

    fn required(&self, prefix: &'static str) -> Result<&str, ParseError> {
        self.single(prefix)?
            .ok_or(ParseError::MissingField(prefix))
    }

    fn repeated(&self, prefix: &'static str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

fn parse_add(tokens: &[&str]) -> Result<Input, ParseError> {
    let fields: Fields = Fields::tokenize(tokens)?;

    let tags: Vec<Tag> = fields
        .repeated("tag/")
        .into_iter()
        .map(Tag::new)
        .collect::<Result<_, DomainError>>()?;
    let remark: Remark = match fields.single("r/")? {
        Some(text) => Remark::new(text)?,
        None => Remark::default(),
    };

    let reservation: Reservation = Reservation::new(
        Name::new(fields.required("n/")?)?,
        Phone::new(fields.required("p/")?)?,
        StartDate::new(fields.required("d/")?)?,
        StartTime::new(fields.required("t/")?)?,
        Duration::new(fields.required("dur/")?)?,
        Pax::new(fields.required("pax/")?)?,
        Table::new(fields.required("tab/")?)?,
        remark,
        tags,
    );
    Ok(Input::Mutate(Command::Add { reservation }))
}

fn parse_edit(tokens: &[&str]) -> Result<Input, ParseError> {
    let (raw_id, rest): (&str, &[&str]) = match tokens.split_first() {
        Some((first, rest)) if !has_prefix(first) => (*first, rest),
        _ => return Err(ParseError::MissingField("ID")),
    };
    let target: Identification = Identification::parse(raw_id)?;
    let fields: Fields = Fields::tokenize(rest)?;

    let patch: ReservationPatch = ReservationPatch {
        name: fields.single("n/")?.map(Name::new).transpose()?,
        phone: fields.single("p/")?.map(Phone::new).transpose()?,
        start_date: fields.single("d/")?.map(StartDate::new).transpose()?,
        start_time: fields.single("t/")?.map(StartTime::new).transpose()?,
        duration: fields.single("dur/")?.map(Duration::new).transpose()?,
        pax: fields.single("pax/")?.map(Pax::new).transpose()?,
        table: fields.single("tab/")?.map(Table::new).transpose()?,
    };
    Ok(Input::Mutate(Command::Edit { target, patch }))
}

fn parse_target<F>(tokens: &[&str], build: F) -> Result<Input, ParseError>
where
    F: FnOnce(Identification) -> Command,
{
    match tokens {
        [raw_id] => Ok(Input::Mutate(build(Identification::parse(raw_id)?))),
        [] => Err(ParseError::MissingField("ID")),
        [_, extra, ..] => Err(ParseError::UnexpectedArgument(String::from(*extra))),
    }
}

fn parse_remark(tokens: &[&str]) -> Result<Input, ParseError> {
    let (raw_id, rest): (&str, &[&str]) = match tokens.split_first() {
        Some((first, rest)) if !has_prefix(first) => (*first, rest),
        _ => return Err(ParseError::MissingField("ID")),
    };
    let target: Identification = Identification::parse(raw_id)?;
    let fields: Fields = Fields::tokenize(rest)?;
    let remark: Remark = Remark::new(fields.required("r/")?)?;
    Ok(Input::Mutate(Command::SetRemark { target, remark }))
}

fn parse_list(tokens: &[&str]) -> Result<Input, ParseError> {
    match tokens {
        [] => Ok(Input::Query(Query::All)),
        ["today"] => Ok(Input::Query(Query::Today)),
        ["tomorrow"] => Ok(Input::Query(Query::Tomorrow)),
        ["previous"] => Ok(Input::Query(Query::Previous)),
        ["regulars"] => Ok(Input::Query(Query::Regulars)),
        [other, ..] => Err(ParseError::UnexpectedArgument(String::from(*other))),
    }
}

fn parse_ongoing(tokens: &[&str]) -> Result<Input, ParseError> {
    match tokens {
        [raw_time] => Ok(Input::Query(Query::Ongoing(StartTime::new(raw_time)?))),
        [] => Err(ParseError::MissingField("TIME")),
        [_, extra, ..] => Err(ParseError::UnexpectedArgument(String::from(*extra))),
    }
}

fn parse_find(tokens: &[&str]) -> Result<Input, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::MissingField("KEYWORD"));
    }
    Ok(Input::Query(Query::Find(tokens.join(" "))))
}

fn has_prefix(token: &str) -> bool {
    PREFIXES.iter().any(|p| token.starts_with(p))
}
