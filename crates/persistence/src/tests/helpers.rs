// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tablebook_domain::{
    Customer, Duration, Name, Pax, Phone, Remark, Reservation, StartDate, StartTime, Table, Tag,
};

pub fn create_test_reservation(name: &str, phone: &str, date: &str, time: &str) -> Reservation {
    Reservation::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        StartDate::new(date).unwrap(),
        StartTime::new(time).unwrap(),
        Duration::new("1.5").unwrap(),
        Pax::new("4").unwrap(),
        Table::new("B12").unwrap(),
        Remark::new("window seat").unwrap(),
        vec![Tag::new("vip").unwrap(), Tag::new("birthday").unwrap()],
    )
}

pub fn create_test_customer(name: &str, phone: &str, count: u32) -> Customer {
    Customer::with_count(Name::new(name).unwrap(), Phone::new(phone).unwrap(), count)
}
