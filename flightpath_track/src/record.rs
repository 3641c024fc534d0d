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
#![allow(unused)]

use std::fmt;
use serde::{Serialize,Deserialize};
use flightpath_common::geo::GeoPoint3;

/// the kind of a decoded telemetry record
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum RecordKind {
    None,
    AirPosition,
    RcStatus,
    MotorStatus,
}

/// horizontal WGS84 position in degrees
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64
}

impl LonLat {
    pub fn new (lon: f64, lat: f64)->Self { LonLat { lon, lat } }
}

/// aircraft position sample. `location` is `None` if the decoder did not have a fix for this sample.
/// Altitude is in meters relative to the take off point and is always carried as received
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct AirPosition {
    pub location: Option<LonLat>,
    pub altitude: f64,
}

impl AirPosition {
    pub fn new (location: Option<LonLat>, altitude: f64)->Self { AirPosition { location, altitude } }

    pub fn unset (altitude: f64)->Self { AirPosition { location: None, altitude } }

    pub fn to_geo_point3 (&self)->Option<GeoPoint3> {
        self.location.map( |loc| GeoPoint3::from_lon_lat_degrees_alt_meters( loc.lon, loc.lat, self.altitude))
    }
}

/// remote control input. We don't interpret these values, they are only carried through
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub struct RcStatus {
    pub aileron: i32,
    pub elevator: i32,
    pub throttle: i32,
    pub rudder: i32,
    pub input_mode: i32,
    pub real_mode: i32,
    pub ioc_mode: i32,
    pub rc_state: i32,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub struct MotorStatus {
    pub status: i32
}

/// the payload of a record
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub enum RecordData {
    None,
    AirPosition(AirPosition),
    RcStatus(RcStatus),
    MotorStatus(MotorStatus),
}

impl RecordData {
    pub fn kind (&self)->RecordKind {
        match self {
            RecordData::None => RecordKind::None,
            RecordData::AirPosition(_) => RecordKind::AirPosition,
            RecordData::RcStatus(_) => RecordKind::RcStatus,
            RecordData::MotorStatus(_) => RecordKind::MotorStatus,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::None => write!( f, "None"),
            RecordData::AirPosition(p) => match p.location {
                Some(loc) => write!( f, "AirPosition( lon: {}, lat: {}, alt: {} )", loc.lon, loc.lat, p.altitude),
                None => write!( f, "AirPosition( unset, alt: {} )", p.altitude)
            }
            RecordData::RcStatus(rc) => write!( f, "RcStatus( ail: {}, ele: {}, thr: {}, rud: {}, state: {} )",
                                                rc.aileron, rc.elevator, rc.throttle, rc.rudder, rc.rc_state),
            RecordData::MotorStatus(m) => write!( f, "MotorStatus( status: {} )", m.status),
        }
    }
}

/// one decoded telemetry sample as stored in a [`crate::store::RecordStore`].
/// Sequence number and kind are fixed once the record is appended. Only the position of
/// unset AirPosition records and the processed/interpolated flags are updated, by the reconstructor
#[derive(Debug,Clone,PartialEq)]
pub struct Record {
    sequence: u64,
    data: RecordData,
    processed: bool,
    interpolated: bool,
}

impl Record {
    pub (crate) fn new (sequence: u64, data: RecordData)->Self {
        Record { sequence, data, processed: false, interpolated: false }
    }

    #[inline] pub fn sequence (&self)->u64 { self.sequence }
    #[inline] pub fn kind (&self)->RecordKind { self.data.kind() }
    #[inline] pub fn data (&self)->&RecordData { &self.data }
    #[inline] pub fn is_processed (&self)->bool { self.processed }
    #[inline] pub fn is_interpolated (&self)->bool { self.interpolated }

    pub fn air_position (&self)->Option<&AirPosition> {
        if let RecordData::AirPosition(p) = &self.data { Some(p) } else { None }
    }

    /// the location if this is an AirPosition record that has one (measured or interpolated)
    pub fn location (&self)->Option<LonLat> {
        self.air_position().and_then( |p| p.location)
    }

    /// an AirPosition record that (still) has no location
    pub fn is_unresolved (&self)->bool {
        matches!( &self.data, RecordData::AirPosition(p) if p.location.is_none())
    }

    pub (crate) fn mark_processed (&mut self) {
        self.processed = true;
    }

    /// fill in a synthesized location. This is a no-op for anything but unset AirPosition records so that
    /// measured samples can never be overwritten
    pub (crate) fn set_interpolated_location (&mut self, loc: LonLat)->bool {
        match &mut self.data {
            RecordData::AirPosition(p) if p.location.is_none() => {
                p.location = Some(loc);
                self.interpolated = true;
                self.processed = true;
                true
            }
            _ => false
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Record( seq: {}, data: {}", self.sequence, self.data)?;
        if self.interpolated { write!( f, ", interpolated")?; }
        write!( f, ")")
    }
}
