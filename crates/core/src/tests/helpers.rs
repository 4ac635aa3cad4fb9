// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ReservationBook;
use tablebook_domain::{
    Customer, Duration, Name, Pax, Phone, Remark, Reservation, StartDate, StartTime, Table,
};

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

pub fn create_test_book() -> ReservationBook {
    ReservationBook::from_reservations(vec![
        create_test_reservation("Alice", "94351253", "21/03/2026", "1800"),
        create_test_reservation("Bob", "81234567", "21/03/2026", "1900"),
    ])
}

pub fn create_test_customer(name: &str, phone: &str, count: u32) -> Customer {
    Customer::with_count(Name::new(name).unwrap(), Phone::new(phone).unwrap(), count)
}
