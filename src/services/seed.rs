//! Demo catalog, customers and ticket history for local runs.

use anyhow::Context;
use chrono::{Duration, Local, NaiveDate, NaiveTime};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::{
    database::Database,
    models::{Customer, Movie, NewCustomer, NewMovie, NewShowtime, SeatLabel, Showtime, Ticket, TicketStatus},
};

const ROOMS: [&str; 6] = ["Room 1", "Room 2", "Room 3", "Room 4", "VIP Room", "IMAX Room"];
// (hour, minute)
const START_TIMES: [(u32, u32); 4] = [(14, 0), (16, 30), (19, 0), (21, 30)];
const SCREENING_DAYS: i64 = 5;
// Average feature length plus the interval
const SCREENING_MINUTES: i64 = 150;
const DEMO_TICKETS: usize = 30;

const CUSTOMERS: [(&str, &str, &str); 10] = [
    ("Ana Silva", "ana.silva@email.com", "(11) 99999-1111"),
    ("Bruno Santos", "bruno.santos@email.com", "(11) 99999-2222"),
    ("Carlos Oliveira", "carlos.oliveira@gmail.com", "(11) 99999-3333"),
    ("Diana Costa", "diana.costa@email.com", "(11) 99999-4444"),
    ("Eduardo Pereira", "eduardo.pereira@email.com", "(11) 99999-5555"),
    ("Fernanda Lima", "fernanda.lima@email.com", "(11) 99999-6666"),
    ("Gabriel Rodrigues", "gabriel.rodrigues@email.com", "(11) 99999-7777"),
    ("Helena Martins", "helena.martins@email.com", "(11) 99999-8888"),
    ("Igor Almeida", "igor.almeida@email.com", "(11) 99999-9999"),
    ("Julia Fernandes", "julia.fernandes@email.com", "(11) 99999-0000"),
];

// title, synopsis, genre, runtime, rating, director, year
const MOVIES: [(&str, &str, &str, i64, &str, &str, i64); 10] = [
    ("City of God", "Two boys grow up in a violent Rio de Janeiro favela and take very different paths.", "Drama", 130, "16", "Fernando Meirelles", 2002),
    ("Central Station", "A retired teacher and a young boy travel the northeast of Brazil looking for his father.", "Drama", 110, "12", "Walter Salles", 1998),
    ("A Dog's Will", "Two penniless friends scheme their way through a small town in the sertao.", "Comedy", 104, "L", "Guel Arraes", 2000),
    ("Parasite", "A poor family works its way into the household of a wealthy one.", "Thriller", 132, "16", "Bong Joon-ho", 2019),
    ("Avengers: Endgame", "The surviving heroes assemble for a final stand against Thanos.", "Action", 181, "12", "Anthony and Joe Russo", 2019),
    ("Joker", "A failed comedian's descent into madness in Gotham City.", "Drama", 122, "16", "Todd Phillips", 2019),
    ("Black Panther", "T'Challa returns home to Wakanda to take the throne.", "Action", 134, "12", "Ryan Coogler", 2018),
    ("The Shape of Water", "A mute cleaner falls for an amphibian creature held in a government lab.", "Romance", 123, "14", "Guillermo del Toro", 2017),
    ("Mad Max: Fury Road", "A desert chase across a post-apocalyptic wasteland in search of freedom.", "Action", 120, "14", "George Miller", 2015),
    ("Interstellar", "Explorers travel through a wormhole to find humanity a new home.", "Science Fiction", 169, "12", "Christopher Nolan", 2014),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub customers: usize,
    pub movies: usize,
    pub showtimes: usize,
    pub tickets: usize,
}

pub fn price_for_room(room: &str) -> i64 {
    if room.contains("VIP") || room.contains("IMAX") {
        2500
    } else {
        1800
    }
}

pub fn capacity_for_room(room: &str) -> i64 {
    if room.contains("IMAX") {
        150
    } else if room.contains("VIP") {
        100
    } else {
        200
    }
}

pub async fn seed_demo_data(db: &Database) -> anyhow::Result<SeedSummary> {
    let mut rng = StdRng::from_entropy();
    seed_demo_data_with(db, &mut rng, Local::now().date_naive()).await
}

/// Replaces all data with the demo set. Screenings start on `first_day`.
pub async fn seed_demo_data_with(
    db: &Database,
    rng: &mut StdRng,
    first_day: NaiveDate,
) -> anyhow::Result<SeedSummary> {
    let mut tx = db.begin_write().await?;

    for table in ["tickets", "showtimes", "customers", "movies"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?;
    }

    let mut customer_ids = Vec::with_capacity(CUSTOMERS.len());
    for (name, email, phone) in CUSTOMERS {
        let customer = NewCustomer {
            name: name.to_string(),
            email: email.to_string(),
            phone: Some(phone.to_string()),
        };
        customer_ids.push(Customer::insert(&customer, &mut *tx).await?.customer_id);
    }

    let mut movie_ids = Vec::with_capacity(MOVIES.len());
    for (title, synopsis, genre, runtime, rating, director, year) in MOVIES {
        let movie = NewMovie {
            title: title.to_string(),
            synopsis: synopsis.to_string(),
            genre: genre.to_string(),
            runtime_minutes: runtime,
            age_rating: rating.to_string(),
            director: director.to_string(),
            release_year: year,
        };
        movie_ids.push(Movie::insert(&movie, &mut *tx).await?.movie_id);
    }

    let mut showtime_ids = Vec::new();
    for day in 0..SCREENING_DAYS {
        let date = first_day + Duration::days(day);
        for (hour, minute) in START_TIMES {
            let starts = NaiveTime::from_hms_opt(hour, minute, 0)
                .with_context(|| format!("invalid start time {hour}:{minute}"))?;
            let ends = starts + Duration::minutes(SCREENING_MINUTES);
            let room = ROOMS[rng.gen_range(0..ROOMS.len())];
            let seats_total = capacity_for_room(room);

            let showtime = NewShowtime {
                movie_id: movie_ids[rng.gen_range(0..movie_ids.len())],
                room: room.to_string(),
                starts_at: starts.format("%H:%M").to_string(),
                ends_at: ends.format("%H:%M").to_string(),
                screening_date: date.format("%Y-%m-%d").to_string(),
                ticket_price: price_for_room(room),
                seats_available: rng.gen_range(20..=seats_total),
                seats_total,
            };
            showtime_ids.push(Showtime::insert(&showtime, &mut *tx).await?.showtime_id);
        }
    }

    let now = Local::now().naive_local();
    for _ in 0..DEMO_TICKETS {
        let (Some(&customer_id), Some(&showtime_id)) =
            (customer_ids.choose(rng), showtime_ids.choose(rng))
        else {
            break;
        };
        let purchased_at = now
            - Duration::days(rng.gen_range(0..=10))
            - Duration::hours(rng.gen_range(0..=23));

        // A confirmed ticket holds a seat; fall back to cancelled when none is left
        let mut status = if rng.gen_bool(0.5) {
            TicketStatus::Confirmed
        } else {
            TicketStatus::Cancelled
        };
        if status == TicketStatus::Confirmed && !Showtime::take_seat(showtime_id, &mut *tx).await? {
            status = TicketStatus::Cancelled;
        }

        let seat = SeatLabel::random(rng);
        Ticket::insert(customer_id, showtime_id, status, purchased_at, seat, &mut *tx).await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        customers: customer_ids.len(),
        movies: movie_ids.len(),
        showtimes: showtime_ids.len(),
        tickets: DEMO_TICKETS,
    };
    info!(?summary, "demo data seeded");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_rooms_cost_more() {
        assert_eq!(price_for_room("VIP Room"), 2500);
        assert_eq!(price_for_room("IMAX Room"), 2500);
        assert_eq!(price_for_room("Room 3"), 1800);
    }

    #[test]
    fn start_times_are_valid_clock_times() {
        for (hour, minute) in START_TIMES {
            assert!(NaiveTime::from_hms_opt(hour, minute, 0).is_some(), "{hour}:{minute}");
        }
    }

    #[test]
    fn capacity_depends_on_room() {
        assert_eq!(capacity_for_room("IMAX Room"), 150);
        assert_eq!(capacity_for_room("VIP Room"), 100);
        assert_eq!(capacity_for_room("Room 1"), 200);
    }
}
