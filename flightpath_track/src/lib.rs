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

//! reconstruction of georeferenced flight paths from decoded flight log telemetry.
//!
//! Records are ingested through a [`CaptureSession`] (one call per decoded record). Finalizing the session
//! runs a single [`PathReconstructor`] pass that fills position gaps and derives a [`Viewpoint`], after
//! which the [`TrackBuilder`] produces the static polyline and per-entity timed tracks that a
//! [`DocumentEmitter`] turns into a document.

pub mod errors;
pub use errors::{FlightPathError, Result};

pub mod config;
pub use config::{load_config, load_flightpath_config, FlightPathConfig, ViewpointOverride};

pub mod record;
pub mod store;
pub use store::RecordStore;

pub mod reconstruct;
pub use reconstruct::{Bounds, PathReconstructor, Reconstruction, Viewpoint};

pub mod track;
pub use track::{EntitySpec, EntityTrack, RigidOffset, TrackBuilder, TrackPoint};

pub mod session;
pub use session::{CaptureSession, CaptureStats, FinalizedCapture};

pub mod emitter;
pub use emitter::{DocumentEmitter, FlightPathDocument, JsonEmitter};

pub mod import;
