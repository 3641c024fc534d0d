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

use serde::{Serialize,Deserialize};
use flightpath_common::{datetime::EpochMillis, geo::{shift_by_meters, GeoPoint3}};

use crate::config::FlightPathConfig;
use crate::record::RecordKind;
use crate::store::RecordStore;

/// fixed displacement in meters of a sub-component relative to the airframe: x = east, y = north, z = up
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Default)]
pub struct RigidOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RigidOffset {
    pub const ZERO: RigidOffset = RigidOffset { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new (x: f64, y: f64, z: f64)->Self { RigidOffset { x, y, z } }

    pub fn is_finite (&self)->bool { self.x.is_finite() && self.y.is_finite() && self.z.is_finite() }
}

/// something that moves rigidly with the aircraft and gets its own track
#[derive(Debug,Clone,PartialEq)]
pub struct EntitySpec {
    pub name: String,
    pub offset: RigidOffset,
    pub ground_altitude: f64, // meters added to the received relative altitude
}

impl EntitySpec {
    pub fn new (name: impl ToString, offset: RigidOffset, ground_altitude: f64)->Self {
        EntitySpec { name: name.to_string(), offset, ground_altitude }
    }
}

/// attitude placeholder. Flight logs have it but we don't reconstruct it yet
#[derive(Debug,Clone,Copy,PartialEq,Default,Serialize)]
pub struct Orientation {
    pub heading: f64,
    pub tilt: f64,
    pub roll: f64,
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct TrackPoint {
    pub time: EpochMillis,
    pub position: GeoPoint3,
    pub orientation: Orientation,
}

#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct EntityTrack {
    pub name: String,
    pub points: Vec<TrackPoint>,
}

impl EntityTrack {
    pub fn len (&self)->usize { self.points.len() }
    pub fn is_empty (&self)->bool { self.points.is_empty() }
}

/// synthesized record clock: the record with sequence number `n` is stamped `epoch + n / sample_rate` seconds
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct SampleClock {
    pub epoch: EpochMillis,
    pub sample_rate: f64, // Hz
}

impl SampleClock {
    pub fn new (epoch: EpochMillis, sample_rate: f64)->Self { SampleClock { epoch, sample_rate } }

    pub fn time_of (&self, sequence: u64)->EpochMillis {
        self.epoch.offset_secs_f64( sequence as f64 / self.sample_rate)
    }
}

/// turns a reconstructed store into renderable artifacts. The store is only read, i.e. any number of
/// entity tracks can be built from the same position series
#[derive(Debug,Clone)]
pub struct TrackBuilder {
    clock: SampleClock
}

impl TrackBuilder {
    pub fn new (clock: SampleClock)->Self { TrackBuilder { clock } }

    pub fn from_config (config: &FlightPathConfig)->Self {
        TrackBuilder::new( SampleClock::new( config.track_epoch_millis(), config.sample_rate))
    }

    pub fn clock (&self)->&SampleClock { &self.clock }

    /// the polyline of all known positions (measured and interpolated) in capture order.
    /// AirPositions that could not be resolved have no coordinates and are skipped
    pub fn build_static_path (&self, store: &RecordStore)->Vec<GeoPoint3> {
        store.iter()
            .filter_map( |r| r.air_position().and_then( |p| p.to_geo_point3()))
            .collect()
    }

    /// the timed track of a rigid entity. Positions are the static path displaced by the entity offset and
    /// lifted by its ground altitude. The first time stamp is truncated to a full second
    pub fn build_dynamic_path (&self, store: &RecordStore, entity: &EntitySpec)->EntityTrack {
        let off = &entity.offset;
        let mut points: Vec<TrackPoint> = Vec::with_capacity( store.count( RecordKind::AirPosition));

        for r in store.iter() {
            if let Some((p,loc)) = r.air_position().and_then( |p| p.location.map( |loc| (p,loc))) {
                let origin = GeoPoint3::from_lon_lat_degrees_alt_meters( loc.lon, loc.lat, p.altitude + entity.ground_altitude);
                let position = shift_by_meters( &origin, off.x, off.y, off.z);

                let mut time = self.clock.time_of( r.sequence());
                if points.is_empty() { time = time.floor_to_secs(); }

                points.push( TrackPoint { time, position, orientation: Orientation::default() });
            }
        }

        EntityTrack { name: entity.name.clone(), points }
    }

    pub fn build_entity_tracks (&self, store: &RecordStore, entities: &[EntitySpec])->Vec<EntityTrack> {
        entities.iter().map( |e| self.build_dynamic_path( store, e)).collect()
    }
}
