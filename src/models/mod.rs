pub mod customer;
pub mod movie;
pub mod showtime;
pub mod ticket;

pub use customer::{Customer, NewCustomer};
pub use movie::{Movie, NewMovie};
pub use showtime::{NewShowtime, Showtime, ShowtimeView};
pub use ticket::{SeatLabel, Ticket, TicketStatus};
