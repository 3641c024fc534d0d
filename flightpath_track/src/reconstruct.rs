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

//! the reconstruction pass that turns a scanned [`RecordStore`] into a gap free position series
//! plus the viewpoint that frames it

use std::fmt;
use serde::{Serialize,Deserialize};
use tracing::debug;
use flightpath_common::{
    geo::{angular_great_circle_span, derive_range, normalize_180},
    geo_constants::MIN_VIEW_RANGE
};

use crate::config::{FlightPathConfig, ViewpointOverride, DEFAULT_GROUND_ALTITUDE};
use crate::record::{LonLat, Record};
use crate::store::RecordStore;

/* #region Bounds ***************************************************************************************/

/// running min/max of measured positions. Starts out with infinite sentinels
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct Bounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_alt: f64,
    pub max_alt: f64,
    pub n_samples: usize,
}

impl Bounds {
    pub fn new ()->Self {
        Bounds {
            min_lon: f64::INFINITY, max_lon: f64::NEG_INFINITY,
            min_lat: f64::INFINITY, max_lat: f64::NEG_INFINITY,
            min_alt: f64::INFINITY, max_alt: f64::NEG_INFINITY,
            n_samples: 0
        }
    }

    pub fn add (&mut self, lon: f64, lat: f64, alt: f64) {
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_alt = self.min_alt.min(alt);
        self.max_alt = self.max_alt.max(alt);
        self.n_samples += 1;
    }

    pub fn is_empty (&self)->bool { self.n_samples == 0 }
}

impl Default for Bounds {
    fn default()->Self { Bounds::new() }
}

/* #endregion Bounds */

/* #region Viewpoint ************************************************************************************/

/// the position from which a renderer should look at the track
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Viewpoint {
    pub center_lon: f64,
    pub center_lat: f64,
    pub center_alt: f64,
    pub range: f64, // meters
}

impl Viewpoint {
    /// what we use if there is nothing to look at
    pub fn fallback ()->Self {
        Viewpoint { center_lon: 0.0, center_lat: 0.0, center_alt: 0.0, range: MIN_VIEW_RANGE }
    }

    pub fn from_override (vp: &ViewpointOverride)->Self {
        Viewpoint { center_lon: vp.lon, center_lat: vp.lat, center_alt: vp.alt, range: vp.range }
    }

    /// derive center and range from measured bounds. Extents that straddle the zero meridian are
    /// treated as crossing the antimeridian (see [`wrap_extent`]). This also applies to short tracks
    /// around Greenwich, which end up centered at 180 (use a viewpoint override for those).
    /// Latitude only gets the same treatment if `wrap_latitude` is set
    pub fn from_bounds (bounds: &Bounds, ground_altitude: f64, wrap_latitude: bool)->Self {
        if bounds.is_empty() {
            return Viewpoint::fallback()
        }

        let (min_lon, max_lon) = wrap_extent( bounds.min_lon, bounds.max_lon);
        let (min_lat, max_lat) = if wrap_latitude {
            wrap_extent( bounds.min_lat, bounds.max_lat)
        } else {
            (bounds.min_lat, bounds.max_lat)
        };

        let center_lon = normalize_180( (min_lon + max_lon) / 2.0);
        let center_lat = (min_lat + max_lat) / 2.0;
        let center_alt = (bounds.min_alt + bounds.max_alt) / 2.0 + ground_altitude;

        let range = derive_range(
            angular_great_circle_span( min_lon, max_lon),
            angular_great_circle_span( min_lat, max_lat)
        );

        Viewpoint { center_lon, center_lat, center_alt, range }
    }
}

impl fmt::Display for Viewpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Viewpoint( center: [{:.6},{:.6},{:.1}], range: {:.1}m )", self.center_lon, self.center_lat, self.center_alt, self.range)
    }
}

/// re-express an extent with `min < 0 < max` on the far side of the globe, i.e. as [max .. min+360].
/// There is no check if the extent is actually closer to 0 than to 180, i.e. [-0.001 .. 0.001] becomes
/// [0.001 .. 359.999] with center 180
pub fn wrap_extent (min: f64, max: f64)->(f64,f64) {
    if min < 0.0 && 0.0 < max {
        (max, min + 360.0)
    } else {
        (min, max)
    }
}

/* #endregion Viewpoint */

/* #region PathReconstructor ****************************************************************************/

/// fraction of the way from the anchor to the current sample at which `sequence` lies.
/// We don't have timestamps at this level so this is based on capture order
#[inline]
pub fn interpolation_fraction (anchor: u64, sequence: u64, current: u64)->f64 {
    (sequence - anchor) as f64 / (current - anchor) as f64
}

/// result of a reconstruction pass
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct Reconstruction {
    pub bounds: Bounds,
    pub viewpoint: Viewpoint,
    pub n_measured: usize,
    pub n_interpolated: usize,
    pub n_unresolved: usize, // AirPositions outside of any pair of known positions
}

#[derive(Debug,Clone)]
pub struct PathReconstructor {
    ground_altitude: f64,
    viewpoint_override: Option<ViewpointOverride>,
    wrap_latitude: bool,
}

impl PathReconstructor {
    pub fn new (ground_altitude: f64)->Self {
        PathReconstructor { ground_altitude, viewpoint_override: None, wrap_latitude: false }
    }

    pub fn from_config (config: &FlightPathConfig)->Self {
        PathReconstructor {
            ground_altitude: config.ground_altitude,
            viewpoint_override: config.effective_viewpoint_override().cloned(),
            wrap_latitude: config.wrap_latitude,
        }
    }

    pub fn with_viewpoint_override (mut self, vp: ViewpointOverride)->Self {
        self.viewpoint_override = Some(vp);
        self
    }

    pub fn with_latitude_wrap (mut self, wrap_latitude: bool)->Self {
        self.wrap_latitude = wrap_latitude;
        self
    }

    /// single forward pass over the store that
    ///   (1) fills unset AirPositions between two known positions by linear interpolation of lon/lat
    ///       (altitudes are kept as received)
    ///   (2) accumulates bounds over measured (non-interpolated) positions
    ///   (3) derives the viewpoint unless there is an override with a non-zero position
    /// Nothing before the first or after the last known position is filled in.
    /// Running this again on the same store does not change records and returns the same result
    pub fn finalize (&self, store: &mut RecordStore)->Reconstruction {
        let records = store.records_mut();
        let mut bounds = Bounds::new();
        let mut anchor: Option<usize> = None; // index of last record with a known position
        let mut n_measured = 0;

        for i in 0..records.len() {
            let Some(loc) = records[i].location() else { continue };

            if !records[i].is_interpolated() {
                if let Some(p) = records[i].air_position() {
                    bounds.add( loc.lon, loc.lat, p.altitude);
                }
                records[i].mark_processed();
                n_measured += 1;
            }

            if let Some(a) = anchor {
                if records[i].sequence() - records[a].sequence() > 1 {
                    fill_gap( records, a, i);
                }
            }
            anchor = Some(i);
        }

        let n_interpolated = records.iter().filter( |r| r.is_interpolated()).count();
        let n_unresolved = records.iter().filter( |r| r.is_unresolved()).count();

        let viewpoint = match &self.viewpoint_override {
            Some(vp) if vp.is_set() => Viewpoint::from_override(vp),
            _ => Viewpoint::from_bounds( &bounds, self.ground_altitude, self.wrap_latitude)
        };

        debug!( "reconstructed {} records: {} measured, {} interpolated, {} unresolved, {}",
                records.len(), n_measured, n_interpolated, n_unresolved, viewpoint);

        Reconstruction { bounds, viewpoint, n_measured, n_interpolated, n_unresolved }
    }
}

impl Default for PathReconstructor {
    fn default()->Self { PathReconstructor::new( DEFAULT_GROUND_ALTITUDE) }
}

/// interpolate all unset positions strictly between records[a] and records[b], which both have locations
fn fill_gap (records: &mut [Record], a: usize, b: usize)->usize {
    let (Some(start), Some(end)) = (records[a].location(), records[b].location()) else { return 0 };
    let seq_a = records[a].sequence();
    let seq_b = records[b].sequence();
    let mut n = 0;

    for r in &mut records[a+1..b] {
        if r.is_unresolved() {
            let f = interpolation_fraction( seq_a, r.sequence(), seq_b);
            let loc = LonLat::new(
                start.lon + (end.lon - start.lon) * f,
                start.lat + (end.lat - start.lat) * f
            );
            if r.set_interpolated_location( loc) { n += 1; }
        }
    }
    n
}

/* #endregion PathReconstructor */
