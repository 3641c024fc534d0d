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

/// this module provides the geodetic support for flight path reconstruction. We use a spherical earth
/// model with the approximations that are customary for short range (drone) tracks:
///   - 1 deg longitude ≈ 111320 * cos(lat) meters
///   - 1 deg latitude ≈ 110540 meters
///   - great circle distances over the equatorial radius (haversine)
/// None of the functions in here clamp or normalize their results unless explicitly stated, i.e. extreme
/// inputs can produce out-of-range longitudes or latitudes.

use std::fmt;
use serde::ser::{Serialize as SerializeTrait, Serializer, SerializeStruct};
use geo::Point;

use crate::{asin, cos, rad, sin2, sqrt};
use crate::geo_constants::{EQATORIAL_EARTH_RADIUS, METERS_PER_DEG_LAT, METERS_PER_DEG_LON_AT_EQUATOR, MIN_VIEW_RANGE};

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/* #region GeoPoint3 ***********************************************************************************************/

/// 3 dimensional point given by longitude and latitude degrees plus altitude in meters.
/// Altitude semantics are up to the producer (flight logs report it relative to the take off point)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint3 {
    point: Point,
    alt: f64
}

impl GeoPoint3 {
    pub fn from_lon_lat_degrees_alt_meters (lon: f64, lat: f64, alt: f64) -> Self {
        GeoPoint3 { point: Point::new( lon, lat), alt }
    }

    #[inline] pub fn longitude_degrees(&self) -> f64 { self.point.x() }
    #[inline] pub fn latitude_degrees(&self) -> f64 { self.point.y() }
    #[inline] pub fn altitude_meters(&self) -> f64 { self.alt }

    /// new point displaced by a local east/north/up offset in meters
    pub fn shifted_by_meters (&self, dx: f64, dy: f64, dz: f64) -> GeoPoint3 {
        shift_by_meters( self, dx, dy, dz)
    }
}

impl fmt::Display for GeoPoint3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.longitude_degrees(), self.latitude_degrees(), self.altitude_meters())
    }
}

impl SerializeTrait for GeoPoint3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint3", 3)?;
        state.serialize_field("lon", &self.longitude_degrees())?;
        state.serialize_field("lat", &self.latitude_degrees())?;
        state.serialize_field("alt", &self.altitude_meters())?;
        state.end()
    }
}

/* #endregion GeoPoint3 */

/* #region geodetic functions **************************************************************************************/

/// convert a local east (dx), north (dy) and up (dz) offset in meters into a new position.
/// Uses the equatorial approximation with longitude degrees scaled by cos(lat) of the origin
pub fn shift_by_meters (origin: &GeoPoint3, dx: f64, dy: f64, dz: f64) -> GeoPoint3 {
    let lat = origin.latitude_degrees();
    let dlon = dx / (METERS_PER_DEG_LON_AT_EQUATOR * cos( rad(lat)));
    let dlat = dy / METERS_PER_DEG_LAT;

    GeoPoint3::from_lon_lat_degrees_alt_meters(
        origin.longitude_degrees() + dlon,
        lat + dlat,
        origin.altitude_meters() + dz
    )
}

/// great circle distance in meters that corresponds to an angular extent [min_deg..max_deg] along
/// a single axis. This is the haversine formula with the half angle of the extent, on a sphere with
/// the equatorial earth radius. The result is never negative
pub fn angular_great_circle_span (min_deg: f64, max_deg: f64) -> f64 {
    let h = sin2( rad(max_deg - min_deg) / 2.0);
    2.0 * EQATORIAL_EARTH_RADIUS * asin( sqrt(h))
}

/// the viewing range in meters for given longitude and latitude spans. We never go below
/// [`MIN_VIEW_RANGE`] so that degenerate (single point or stationary) tracks still get a usable view.
/// Note that `f64::max` ignores NaN operands, i.e. the floor also holds for degenerate inputs
pub fn derive_range (span_lon_m: f64, span_lat_m: f64) -> f64 {
    span_lon_m.max( span_lat_m).max( MIN_VIEW_RANGE)
}

/* #endregion geodetic functions */
