//! Booking submission against the backend boundary

mod common;

use common::TestEnv;
use quickcourt::error::{BookingError, Error};
use quickcourt::models::{Court, CourtStatus};
use quickcourt::schemas::booking::ConflictCheckRequest;
use quickcourt::state::BookingComposer;
use reqwest::StatusCode;

fn local_court(id: i64) -> Court {
	Court {
		id,
		facility_id: 1,
		name: format!("Court {id}"),
		sport_type: "Badminton".to_string(),
		surface_type: None,
		court_number: None,
		hourly_rate: 600.0,
		status: CourtStatus::Active,
		created_at: None,
	}
}

#[tokio::test(flavor = "multi_thread")]
async fn zero_selected_courts_issue_no_request() {
	let env = TestEnv::spawn().await;
	let session = env.session();

	let mut composer = BookingComposer::new(vec![local_court(1)]);
	composer.set_date(env.test_date());
	composer.set_start_time("13:00".parse().unwrap());

	let err = composer
		.submit(&env.client, &session, "card")
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		Error::Booking(BookingError::NoCourtsSelected)
	));
	assert_eq!(env.total_hits(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn submission_creates_one_booking_per_court() {
	let env = TestEnv::spawn().await;
	let session = env.session();

	let mut composer =
		BookingComposer::new(env.client.courts(1).await.unwrap());
	composer.select_sport("Badminton");
	composer.set_date(env.test_date());
	composer.set_start_time("1:00 PM".parse().unwrap());
	composer.set_duration(2);
	composer.toggle_court(1);

	let booking_ids = composer
		.submit(&env.client, &session, "card")
		.await
		.unwrap();

	assert_eq!(booking_ids, vec![1]);
	assert_eq!(env.hits("POST /bookings"), 1);

	// The wire carries the canonical 24-hour spelling even though the
	// draft was composed in 12-hour display notation
	let state = env.state.lock();
	assert_eq!(state.bookings.len(), 1);
	assert_eq!(state.bookings[0].start_time, "13:00");
	assert_eq!(state.bookings[0].end_time, "15:00");
	assert_eq!(state.bookings[0].duration, 2);
	assert_eq!(state.bookings[0].total_amount, 1200.0);
}

#[tokio::test(flavor = "multi_thread")]
async fn conflicting_submission_surfaces_the_backend_rejection() {
	let env = TestEnv::spawn().await;
	let session = env.session();

	let mut composer = BookingComposer::new(vec![local_court(1)]);
	composer.set_date(env.test_date());
	composer.set_start_time("10:00".parse().unwrap());
	composer.toggle_court(1);

	composer.submit(&env.client, &session, "card").await.unwrap();

	let err = composer
		.submit(&env.client, &session, "card")
		.await
		.unwrap_err();

	match err {
		Error::Api(api) => {
			assert_eq!(api.status, StatusCode::BAD_REQUEST);
			assert!(api.message.contains("already booked"));
		},
		other => panic!("expected an API error, got {other:?}"),
	}
}

#[tokio::test(flavor = "multi_thread")]
async fn blocked_slots_are_rejected_by_the_backend() {
	let env = TestEnv::spawn().await;
	let session = env.session();

	{
		let mut state = env.state.lock();
		for slot in &mut state.slots {
			if slot.court_id == 1 && slot.start_time == "15:00" {
				slot.is_available = false;
			}
		}
	}

	let mut composer = BookingComposer::new(vec![local_court(1)]);
	composer.set_date(env.test_date());
	composer.set_start_time("15:00".parse().unwrap());
	composer.toggle_court(1);

	let err = composer
		.submit(&env.client, &session, "card")
		.await
		.unwrap_err();

	match err {
		Error::Api(api) => {
			assert!(api.message.contains("not available"));
		},
		other => panic!("expected an API error, got {other:?}"),
	}
}

#[tokio::test(flavor = "multi_thread")]
async fn listing_and_cancelling_own_bookings() {
	let env = TestEnv::spawn().await;
	let session = env.session();

	let mut composer = BookingComposer::new(vec![local_court(1)]);
	composer.set_date(env.test_date());
	composer.set_start_time("17:00".parse().unwrap());
	composer.toggle_court(1);
	composer.submit(&env.client, &session, "card").await.unwrap();

	let bookings = env.client.bookings(&session).await.unwrap();
	assert_eq!(bookings.len(), 1);
	assert!(bookings[0].is_cancellable());

	let response =
		env.client.cancel_booking(&session, bookings[0].id).await.unwrap();
	assert_eq!(response.message, "Booking cancelled successfully");

	// Cancelling twice is a backend rejection, not a client crash
	let err = env
		.client
		.cancel_booking(&session, bookings[0].id)
		.await
		.unwrap_err();
	assert!(matches!(err, Error::Api(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn conflict_probe_reports_without_blocking() {
	let env = TestEnv::spawn().await;
	let session = env.session();

	let mut composer = BookingComposer::new(vec![local_court(1)]);
	composer.set_date(env.test_date());
	composer.set_start_time("19:00".parse().unwrap());
	composer.toggle_court(1);
	composer.submit(&env.client, &session, "card").await.unwrap();

	let probe = ConflictCheckRequest {
		court_id:     1,
		booking_date: env.test_date(),
		start_time:   "19:00".parse().unwrap(),
		end_time:     "20:00".parse().unwrap(),
	};
	let outcome = env.client.check_booking_conflict(&probe).await.unwrap();

	assert!(outcome.has_conflict);
	assert_eq!(outcome.conflicts.len(), 1);
}
