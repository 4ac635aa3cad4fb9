// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Duration, Name, Pax, Phone, Remark, Reservation, StartDate, StartTime, Table, Tag};

pub fn create_test_reservation(name: &str, phone: &str, date: &str, time: &str) -> Reservation {
    Reservation::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        StartDate::new(date).unwrap(),
        StartTime::new(time).unwrap(),
        Duration::new("2").unwrap(),
        Pax::new("2").unwrap(),
        Table::new("A1").unwrap(),
        Remark::new("").unwrap(),
        Vec::new(),
    )
}

pub fn create_tagged_reservation(name: &str, tags: &[&str]) -> Reservation {
    Reservation::new(
        Name::new(name).unwrap(),
        Phone::new("94351253").unwrap(),
        StartDate::new("21/03/2026").unwrap(),
        StartTime::new("1800").unwrap(),
        Duration::new("1.5").unwrap(),
        Pax::new("4").unwrap(),
        Table::new("B12").unwrap(),
        Remark::new("window seat").unwrap(),
        tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
    )
}
