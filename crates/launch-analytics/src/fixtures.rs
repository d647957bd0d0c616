//! Reference dataset shared by the analytics tests.
//!
//! 13 LEO launches by three operators. Rockets are rebuilt for every launch
//! so grouping must rely on value equality.
//!
//! | # | date       | operator | rocket   | outcome | price |
//! |---|------------|----------|----------|---------|-------|
//! | 0 | 2019-01-01 | ULA      | rocket_0 | S       | 100   |
//! | 1 | 2017-06-01 | ULA      | rocket_0 | S       | 300   |
//! | 2 | 2017-04-01 | ULA      | rocket_0 | S       | 400   |
//! | 3 | 2016-03-01 | ULA      | rocket_0 | F       | 500   |
//! | 4 | 2016-04-01 | SpaceX   | rocket_1 | S       | 100   |
//! | 5 | 2017-11-01 | SpaceX   | rocket_1 | F       | 600   |
//! | 6 | 2018-06-01 | SpaceX   | rocket_1 | S       | 700   |
//! | 7 | 2017-05-01 | SpaceX   | rocket_2 | F       | 900   |
//! | 8 | 2017-12-01 | ESA      | rocket_2 | S       | 1000  |
//! | 9 | 2015-05-01 | ESA      | rocket_5 | F       | 1100  |
//! |10 | 2016-06-01 | ESA      | rocket_5 | F       | 1200  |
//! |11 | 2016-10-01 | ESA      | rocket_6 | F       | 100   |
//! |12 | 2018-04-01 | ESA      | rocket_6 | S       | 1100  |
//!
//! rocket_0..=rocket_4 are built in the USA (rocket_0..=2 by ULA, 3..=4 by
//! SpaceX); rocket_5..=rocket_8 are built in Europe by ESA.

use chrono::NaiveDate;
use launch_domain::{Launch, LaunchOutcome, LaunchServiceProvider, Rocket};
use rust_decimal::Decimal;

use launch_domain::LaunchOutcome::{Failed, Successful};

const YEARS: [i32; 13] = [2019, 2017, 2017, 2016, 2016, 2017, 2018, 2017, 2017, 2015, 2016, 2016, 2018];
const MONTHS: [u32; 13] = [1, 6, 4, 3, 4, 11, 6, 5, 12, 5, 6, 10, 4];
const ROCKET_INDEX: [usize; 13] = [0, 0, 0, 0, 1, 1, 1, 2, 2, 5, 5, 6, 6];
const PRICES: [i64; 13] = [100, 300, 400, 500, 100, 600, 700, 900, 1000, 1100, 1200, 100, 1100];
const OUTCOMES: [LaunchOutcome; 13] = [
    Successful, Successful, Successful, Failed, Successful, Failed, Successful, Failed,
    Successful, Failed, Failed, Failed, Successful,
];

pub fn ula() -> LaunchServiceProvider {
    LaunchServiceProvider::new("ULA", 1990, "USA").unwrap()
}

pub fn spacex() -> LaunchServiceProvider {
    LaunchServiceProvider::new("SpaceX", 2002, "USA").unwrap()
}

pub fn esa() -> LaunchServiceProvider {
    LaunchServiceProvider::new("ESA", 1975, "Europe").unwrap()
}

/// Operator of fixture launch `i`
pub fn operator(i: usize) -> LaunchServiceProvider {
    match i {
        0..=3 => ula(),
        4..=7 => spacex(),
        _ => esa(),
    }
}

pub fn rocket(i: usize) -> Rocket {
    match i {
        0..=2 => Rocket::new(format!("rocket_{i}"), "USA", ula()).unwrap(),
        3..=4 => Rocket::new(format!("rocket_{i}"), "USA", spacex()).unwrap(),
        _ => Rocket::new(format!("rocket_{i}"), "Europe", esa()).unwrap(),
    }
}

pub fn date(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

pub fn launches() -> Vec<Launch> {
    (0..13)
        .map(|i| {
            Launch::new(
                date(YEARS[i], MONTHS[i]),
                rocket(ROCKET_INDEX[i]),
                operator(i),
                Decimal::from(PRICES[i]),
                OUTCOMES[i],
                "LEO",
            )
            .unwrap()
            .with_launch_site("VAFB")
        })
        .collect()
}
