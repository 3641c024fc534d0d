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

use std::{collections::HashSet, fs, path::Path};
use chrono::{DateTime, Utc};
use serde::{Serialize,Deserialize};
use flightpath_common::{datetime::{self, EpochMillis}, geo_constants::MIN_VIEW_RANGE};

use crate::errors::{Result, FlightPathError, config_error};
use crate::track::{EntitySpec, RigidOffset};

pub const DEFAULT_GROUND_ALTITUDE: f64 = 500.0; // meters
pub const DEFAULT_SAMPLE_RATE: f64 = 100.0; // Hz
pub const MIN_SAMPLE_RATE: f64 = 1e-3; // Hz, keeps synthesized time stamps within i64 milliseconds

pub const AIRCRAFT_ENTITY: &str = "aircraft";
const PROPELLER_ARM: f64 = 0.175; // meters from airframe center along each axis
const PROPELLER_HEIGHT: f64 = 0.1;

/// explicitly configured viewpoint. An override with both `lon` and `lat` being exactly 0.0 counts as unset
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct ViewpointOverride {
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub alt: f64,
    #[serde(default="default_view_range")]
    pub range: f64,
}

impl ViewpointOverride {
    pub fn new (lon: f64, lat: f64)->Self {
        ViewpointOverride { lon, lat, alt: 0.0, range: MIN_VIEW_RANGE }
    }

    pub fn is_set (&self)->bool { !(self.lon == 0.0 && self.lat == 0.0) }
}

/// configured track entity. If there is no `ground_altitude` the session wide value is used
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct EntityConfig {
    pub name: String,
    #[serde(default)]
    pub offset: RigidOffset,
    #[serde(default)]
    pub ground_altitude: Option<f64>,
}

impl EntityConfig {
    pub fn new (name: impl ToString, offset: RigidOffset)->Self {
        EntityConfig { name: name.to_string(), offset, ground_altitude: None }
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct FlightPathConfig {
    /// meters added to the viewpoint center and to all entity tracks
    #[serde(default="default_ground_altitude")]
    pub ground_altitude: f64,

    #[serde(default)]
    pub viewpoint_override: Option<ViewpointOverride>,

    /// do we treat (0.0,0.0) positions as "no fix"
    #[serde(default="default_true")]
    pub zero_position_is_unset: bool,

    /// apply the antimeridian wrap rule also to latitude (only useful for comparing with legacy output)
    #[serde(default)]
    pub wrap_latitude: bool,

    /// time of the first sample clock tick
    #[serde(default="default_track_epoch")]
    pub track_epoch: DateTime<Utc>,

    /// assumed record rate in Hz for synthesized track timestamps
    #[serde(default="default_sample_rate")]
    pub sample_rate: f64,

    #[serde(default="default_entities")]
    pub entities: Vec<EntityConfig>,
}

fn default_ground_altitude()->f64 { DEFAULT_GROUND_ALTITUDE }
fn default_true()->bool { true }
fn default_track_epoch()->DateTime<Utc> { datetime::ZERO }
fn default_sample_rate()->f64 { DEFAULT_SAMPLE_RATE }
fn default_view_range()->f64 { MIN_VIEW_RANGE }

/// airframe plus four propellers in X configuration
pub fn default_entities()->Vec<EntityConfig> {
    let a = PROPELLER_ARM;
    let h = PROPELLER_HEIGHT;
    vec![
        EntityConfig::new( AIRCRAFT_ENTITY, RigidOffset::ZERO),
        EntityConfig::new( "propeller 1", RigidOffset::new(  a,  a, h)),
        EntityConfig::new( "propeller 2", RigidOffset::new( -a,  a, h)),
        EntityConfig::new( "propeller 3", RigidOffset::new( -a, -a, h)),
        EntityConfig::new( "propeller 4", RigidOffset::new(  a, -a, h)),
    ]
}

impl Default for FlightPathConfig {
    fn default()->Self {
        FlightPathConfig {
            ground_altitude: DEFAULT_GROUND_ALTITUDE,
            viewpoint_override: None,
            zero_position_is_unset: true,
            wrap_latitude: false,
            track_epoch: datetime::ZERO,
            sample_rate: DEFAULT_SAMPLE_RATE,
            entities: default_entities(),
        }
    }
}

impl FlightPathConfig {

    pub fn from_ron_str (s: &str)->Result<Self> {
        let config: FlightPathConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate (&self)->Result<()> {
        if !self.ground_altitude.is_finite() {
            return Err( config_error!("ground_altitude not a finite number: {}", self.ground_altitude))
        }
        if !(self.sample_rate.is_finite() && self.sample_rate >= MIN_SAMPLE_RATE) {
            return Err( config_error!("sample_rate has to be at least {} Hz: {}", MIN_SAMPLE_RATE, self.sample_rate))
        }

        if let Some(vp) = &self.viewpoint_override {
            if !(vp.lon.is_finite() && (-180.0..=180.0).contains(&vp.lon)) {
                return Err( config_error!("viewpoint_override.lon out of range: {}", vp.lon))
            }
            if !(vp.lat.is_finite() && (-90.0..=90.0).contains(&vp.lat)) {
                return Err( config_error!("viewpoint_override.lat out of range: {}", vp.lat))
            }
            if !vp.alt.is_finite() || !(vp.range.is_finite() && vp.range > 0.0) {
                return Err( config_error!("viewpoint_override alt/range invalid: {}/{}", vp.alt, vp.range))
            }
        }

        let mut names: HashSet<&str> = HashSet::new();
        for e in &self.entities {
            if e.name.trim().is_empty() {
                return Err( config_error!("entity without name"))
            }
            if !names.insert( e.name.as_str()) {
                return Err( config_error!("duplicate entity name: {}", e.name))
            }
            if !e.offset.is_finite() {
                return Err( config_error!("entity {} has non-finite offset", e.name))
            }
            if matches!( e.ground_altitude, Some(alt) if !alt.is_finite()) {
                return Err( config_error!("entity {} has non-finite ground_altitude", e.name))
            }
        }

        Ok(())
    }

    /// the override that should be used for the viewpoint, if any
    pub fn effective_viewpoint_override (&self)->Option<&ViewpointOverride> {
        self.viewpoint_override.as_ref().filter( |vp| vp.is_set())
    }

    pub fn track_epoch_millis (&self)->EpochMillis {
        EpochMillis::from( self.track_epoch)
    }

    /// entity specs with resolved ground altitudes
    pub fn entity_specs (&self)->Vec<EntitySpec> {
        self.entities.iter().map( |e| {
            EntitySpec::new( e.name.as_str(), e.offset, e.ground_altitude.unwrap_or( self.ground_altitude))
        }).collect()
    }
}

/// load a RON config file
pub fn load_config<C> (path: impl AsRef<Path>)->Result<C> where C: for<'a> Deserialize<'a> {
    let s = fs::read_to_string( path)?;
    Ok( ron::from_str( &s)? )
}

/// load and validate a [`FlightPathConfig`]
pub fn load_flightpath_config (path: impl AsRef<Path>)->Result<FlightPathConfig> {
    let config: FlightPathConfig = load_config( path)?;
    config.validate()?;
    Ok(config)
}
