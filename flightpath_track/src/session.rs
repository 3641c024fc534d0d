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

//! the context object for a single capture. A [`CaptureSession`] owns the record store while records
//! are ingested. Finalizing consumes the session and hands the store over to a [`FinalizedCapture`], so
//! there can't be appends once the reconstruction pass has run

use std::fmt;
use serde::Serialize;
use tracing::{info, warn};
use uom::si::{f64::Length, length::{decimeter, meter}};
use flightpath_common::geo::GeoPoint3;

use crate::config::FlightPathConfig;
use crate::errors::{FlightPathError, Result};
use crate::emitter::FlightPathDocument;
use crate::reconstruct::{Bounds, PathReconstructor, Reconstruction, Viewpoint};
use crate::record::{AirPosition, LonLat, MotorStatus, RcStatus, RecordData};
use crate::store::RecordStore;
use crate::track::{EntitySpec, EntityTrack, TrackBuilder};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize)]
pub struct CaptureStats {
    pub n_air_position: usize,
    pub n_unset_position: usize,
    pub n_rc_status: usize,
    pub n_motor_status: usize,
    pub n_other: usize,
    pub n_rejected: usize,
}

impl CaptureStats {
    pub fn n_records (&self)->usize {
        self.n_air_position + self.n_rc_status + self.n_motor_status + self.n_other
    }
}

impl fmt::Display for CaptureStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{} records (air_position: {} of which unset: {}, rc_status: {}, motor_status: {}, other: {}), rejected: {}",
                self.n_records(), self.n_air_position, self.n_unset_position, self.n_rc_status, self.n_motor_status, self.n_other, self.n_rejected)
    }
}

/* #region CaptureSession *******************************************************************************/

pub struct CaptureSession {
    config: FlightPathConfig,
    store: RecordStore,
    stats: CaptureStats,
}

impl CaptureSession {
    pub fn new (config: FlightPathConfig)->Result<Self> {
        config.validate()?;
        Ok( CaptureSession { config, store: RecordStore::new(), stats: CaptureStats::default() } )
    }

    pub fn config (&self)->&FlightPathConfig { &self.config }
    pub fn store (&self)->&RecordStore { &self.store }
    pub fn stats (&self)->CaptureStats { self.stats }

    /// decoder callback for aircraft positions, with angles in radians and the relative height in decimeters.
    /// Returns the sequence number of the stored record. Non-finite angles are rejected and not stored
    pub fn on_air_position (&mut self, longitude_rad: f64, latitude_rad: f64, relative_height_dm: i32)->Result<u64> {
        if !(longitude_rad.is_finite() && latitude_rad.is_finite()) {
            self.stats.n_rejected += 1;
            warn!("rejected air position record after #{}: lon={}, lat={}", self.store.len(), longitude_rad, latitude_rad);
            return Err( FlightPathError::InvalidRecord( format!("non-finite position {longitude_rad},{latitude_rad}")))
        }

        let lon = longitude_rad.to_degrees();
        let lat = latitude_rad.to_degrees();
        let altitude = Length::new::<decimeter>( relative_height_dm as f64).get::<meter>();

        let location = if self.config.zero_position_is_unset && lon == 0.0 && lat == 0.0 {
            self.stats.n_unset_position += 1;
            None
        } else {
            Some( LonLat::new( lon, lat))
        };

        self.stats.n_air_position += 1;
        Ok( self.store.append( RecordData::AirPosition( AirPosition::new( location, altitude))) )
    }

    pub fn on_rc_status (&mut self, rc: RcStatus)->u64 {
        self.stats.n_rc_status += 1;
        self.store.append( RecordData::RcStatus(rc))
    }

    pub fn on_motor_status (&mut self, status: i32)->u64 {
        self.stats.n_motor_status += 1;
        self.store.append( RecordData::MotorStatus( MotorStatus { status }))
    }

    /// a record we could not classify. We still store it so that capture order is preserved
    pub fn on_unknown (&mut self)->u64 {
        self.stats.n_other += 1;
        self.store.append( RecordData::None)
    }

    /// end of capture. Runs the reconstruction pass
    pub fn finalize (self)->FinalizedCapture {
        let CaptureSession { config, mut store, stats } = self;
        let reconstructor = PathReconstructor::from_config( &config);
        let track_builder = TrackBuilder::from_config( &config);

        let reconstruction = reconstructor.finalize( &mut store);
        info!("finalized capture with {}: {}", stats, reconstruction.viewpoint);

        FinalizedCapture { config, store, stats, reconstructor, track_builder, reconstruction }
    }

    /// give up on the capture without running the reconstruction. The records are returned as received
    pub fn into_store (self)->RecordStore {
        self.store
    }
}

/* #endregion CaptureSession */

/* #region FinalizedCapture *****************************************************************************/

/// the reconstructed capture as seen by document emitters
pub struct FinalizedCapture {
    config: FlightPathConfig,
    store: RecordStore,
    stats: CaptureStats,
    reconstructor: PathReconstructor,
    track_builder: TrackBuilder,
    reconstruction: Reconstruction,
}

impl FinalizedCapture {
    pub fn config (&self)->&FlightPathConfig { &self.config }
    pub fn store (&self)->&RecordStore { &self.store }
    pub fn stats (&self)->CaptureStats { self.stats }
    pub fn reconstruction (&self)->&Reconstruction { &self.reconstruction }

    pub fn viewpoint (&self)->Viewpoint { self.reconstruction.viewpoint }
    pub fn bounds (&self)->&Bounds { &self.reconstruction.bounds }

    pub fn static_path (&self)->Vec<GeoPoint3> {
        self.track_builder.build_static_path( &self.store)
    }

    pub fn dynamic_path (&self, entity: &EntitySpec)->EntityTrack {
        self.track_builder.build_dynamic_path( &self.store, entity)
    }

    /// one track for each configured entity
    pub fn entity_tracks (&self)->Vec<EntityTrack> {
        self.track_builder.build_entity_tracks( &self.store, &self.config.entity_specs())
    }

    /// run the reconstruction pass again. This does not change an already reconstructed store
    pub fn refinalize (&mut self)->&Reconstruction {
        self.reconstruction = self.reconstructor.finalize( &mut self.store);
        &self.reconstruction
    }

    pub fn document (&self, name: impl ToString)->FlightPathDocument {
        FlightPathDocument {
            name: name.to_string(),
            viewpoint: self.viewpoint(),
            static_path: self.static_path(),
            tracks: self.entity_tracks(),
        }
    }
}

/* #endregion FinalizedCapture */
