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

/// geodetic constants shared by all flightpath crates

/// semi major axis in meters. This is also the radius of the spherical earth model used for viewpoint ranges
pub const EQATORIAL_EARTH_RADIUS: f64 = 6378137.0;

/// length of one degree of longitude at the equator in meters (scaled by cos(lat) elsewhere)
pub const METERS_PER_DEG_LON_AT_EQUATOR: f64 = 111320.0;

/// length of one degree of latitude in meters (spherical approximation)
pub const METERS_PER_DEG_LAT: f64 = 110540.0;

/// smallest range in meters we use for a viewpoint, so that single point or stationary tracks can still be framed
pub const MIN_VIEW_RANGE: f64 = 10.0;
