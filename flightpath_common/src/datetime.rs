/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::fmt;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Serialize,Deserialize};

/// millisecond precision epoch time. This is enough for telemetry sample clocks and keeps track points dense
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn new (millis:i64)->Self { EpochMillis(millis) }

    pub fn from_secs (secs: i64)->Self { EpochMillis(secs*1000) }

    pub fn millis (&self)->i64 { self.0 }

    /// truncate to the full second at or before this time (also for pre-epoch values)
    pub fn floor_to_secs (&self)->Self {
        EpochMillis( self.0 - self.0.rem_euclid(1000))
    }

    /// time advanced by (possibly fractional) seconds, rounded to the nearest millisecond.
    /// Saturates at the i64 millisecond limits
    pub fn offset_secs_f64 (&self, secs: f64)->Self {
        EpochMillis( self.0.saturating_add( (secs * 1000.0).round() as i64))
    }

    pub fn to_date_time (&self)->Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis( self.0)
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_date_time() {
            Some(date) => write!(f, "{}", date),
            None => write!(f, "{}ms", self.0)
        }
    }
}

impl<Tz> From<DateTime<Tz>> for EpochMillis where Tz: TimeZone {
    fn from (date: DateTime<Tz>)->Self { EpochMillis( date.timestamp_millis()) }
}

pub const ZERO: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;
