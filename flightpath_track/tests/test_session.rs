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

use flightpath_common::approx_eq;
use flightpath_track::record::{RcStatus, RecordKind};
use flightpath_track::{CaptureSession, FlightPathConfig, FlightPathError, RecordStore, ViewpointOverride};

// run with "cargo test --test test_session -- --nocapture"

const EPS: f64 = 1e-9;

fn session ()->CaptureSession {
    CaptureSession::new( FlightPathConfig::default()).unwrap()
}

fn rad (deg: f64)->f64 { deg.to_radians() }

#[test]
fn test_air_position_conversion () {
    let mut s = session();
    let seq = s.on_air_position( rad(-121.5), rad(37.25), 1234).unwrap();
    assert_eq!( seq, 1);

    let r = s.store().get(1).unwrap();
    println!("{r}");
    let p = r.air_position().unwrap();
    let loc = p.location.unwrap();

    assert!( approx_eq( loc.lon, -121.5, EPS));
    assert!( approx_eq( loc.lat, 37.25, EPS));
    assert!( approx_eq( p.altitude, 123.4, EPS)); // decimeters to meters
    assert!( !r.is_processed());
}

#[test]
fn test_zero_position_is_unset () {
    let mut s = session();
    s.on_air_position( 0.0, 0.0, 50).unwrap();
    let r = s.store().get(1).unwrap();
    assert!( r.is_unresolved());
    assert!( approx_eq( r.air_position().unwrap().altitude, 5.0, EPS));
    assert_eq!( s.stats().n_unset_position, 1);

    let config = FlightPathConfig { zero_position_is_unset: false, ..FlightPathConfig::default() };
    let mut s = CaptureSession::new( config).unwrap();
    s.on_air_position( 0.0, 0.0, 50).unwrap();
    let r = s.store().get(1).unwrap();
    assert!( !r.is_unresolved());
    assert_eq!( s.stats().n_unset_position, 0);
}

#[test]
fn test_non_finite_position_is_rejected () {
    let mut s = session();
    s.on_air_position( rad(10.0), rad(20.0), 0).unwrap();

    let res = s.on_air_position( f64::NAN, rad(20.0), 0);
    assert!( matches!( res, Err(FlightPathError::InvalidRecord(_))));
    let res = s.on_air_position( rad(10.0), f64::INFINITY, 0);
    assert!( res.is_err());

    let stats = s.stats();
    println!("{stats}");
    assert_eq!( stats.n_rejected, 2);
    assert_eq!( stats.n_air_position, 1);
    assert_eq!( s.store().len(), 1);

    // the next accepted record continues the sequence without holes
    assert_eq!( s.on_motor_status(1), 2);
}

#[test]
fn test_mixed_records_keep_capture_order () {
    let mut s = session();
    assert_eq!( s.on_unknown(), 1);
    assert_eq!( s.on_rc_status( RcStatus { throttle: 1024, ..RcStatus::default() }), 2);
    assert_eq!( s.on_air_position( rad(8.0), rad(47.0), 0).unwrap(), 3);
    assert_eq!( s.on_motor_status(3), 4);

    let kinds: Vec<RecordKind> = s.store().iter().map( |r| r.kind()).collect();
    assert_eq!( kinds, vec![ RecordKind::None, RecordKind::RcStatus, RecordKind::AirPosition, RecordKind::MotorStatus]);

    let stats = s.stats();
    assert_eq!( stats.n_records(), 4);
    assert_eq!( (stats.n_other, stats.n_rc_status, stats.n_air_position, stats.n_motor_status), (1,1,1,1));
}

#[test]
fn test_finalize () {
    let mut s = session();
    s.on_air_position( rad(10.0), rad(20.0), 100).unwrap();
    s.on_air_position( 0.0, 0.0, 110).unwrap(); // no fix
    s.on_rc_status( RcStatus::default());
    s.on_air_position( rad(10.3), rad(20.3), 120).unwrap();

    let mut fc = s.finalize();
    let rec = *fc.reconstruction();
    println!("{:?}", rec);

    assert_eq!( rec.n_measured, 2);
    assert_eq!( rec.n_interpolated, 1);
    assert_eq!( rec.n_unresolved, 0);
    assert!( fc.store().iter().all( |r| r.kind() != RecordKind::AirPosition || r.is_processed()));

    let loc = fc.store().get(2).unwrap().location().unwrap();
    assert!( approx_eq( loc.lon, 10.1, 1e-6));
    assert!( approx_eq( loc.lat, 20.1, 1e-6));

    let vp = fc.viewpoint();
    assert!( approx_eq( vp.center_lon, 10.15, 1e-6));
    assert!( approx_eq( vp.center_alt, 11.0 + 500.0, 1e-6)); // mean of 10m and 12m plus ground

    // a second pass leaves everything as it was
    let records: Vec<_> = fc.store().iter().cloned().collect();
    assert_eq!( *fc.refinalize(), rec);
    let records2: Vec<_> = fc.store().iter().cloned().collect();
    assert_eq!( records, records2);
}

#[test]
fn test_finalize_with_override () {
    let config = FlightPathConfig { viewpoint_override: Some( ViewpointOverride::new( -122.0, 38.0)), ..FlightPathConfig::default() };
    let mut s = CaptureSession::new( config).unwrap();
    s.on_air_position( rad(10.0), rad(20.0), 0).unwrap();

    let vp = s.finalize().viewpoint();
    assert_eq!( (vp.center_lon, vp.center_lat, vp.center_alt, vp.range), (-122.0, 38.0, 0.0, 10.0));
}

#[test]
fn test_entity_tracks () {
    let mut s = session();
    for i in 0..5 {
        s.on_air_position( rad(10.0 + i as f64 * 0.001), rad(20.0), 100).unwrap();
        s.on_motor_status(1);
    }
    let fc = s.finalize();

    let static_path = fc.static_path();
    let tracks = fc.entity_tracks();
    let names: Vec<&str> = tracks.iter().map( |t| t.name.as_str()).collect();
    assert_eq!( names, vec!["aircraft", "propeller 1", "propeller 2", "propeller 3", "propeller 4"]);

    for t in &tracks {
        assert_eq!( t.len(), static_path.len());
    }

    let aircraft = &tracks[0];
    assert_eq!( aircraft.points[0].position.longitude_degrees(), static_path[0].longitude_degrees());
    assert!( approx_eq( aircraft.points[0].position.altitude_meters(), 10.0 + 500.0, EPS));

    let prop1 = &tracks[1];
    assert!( prop1.points[0].position.longitude_degrees() > static_path[0].longitude_degrees());
    assert!( prop1.points[0].position.latitude_degrees() > static_path[0].latitude_degrees());

    let doc = fc.document("test");
    assert_eq!( doc.name, "test");
    assert_eq!( doc.static_path, static_path);
    assert_eq!( doc.tracks, tracks);
}

#[test]
fn test_into_store_skips_reconstruction () {
    let mut s = session();
    s.on_air_position( rad(10.0), rad(20.0), 0).unwrap();
    s.on_air_position( 0.0, 0.0, 0).unwrap();
    s.on_air_position( rad(10.2), rad(20.2), 0).unwrap();

    let store: RecordStore = s.into_store();
    assert_eq!( store.len(), 3);
    assert!( store.iter().all( |r| !r.is_processed() && !r.is_interpolated()));
    assert!( store.get(2).unwrap().is_unresolved());
}

#[test]
fn test_invalid_config_is_rejected () {
    let config = FlightPathConfig { sample_rate: 0.0, ..FlightPathConfig::default() };
    assert!( matches!( CaptureSession::new( config), Err(FlightPathError::ConfigError(_))));
}
