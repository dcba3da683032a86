pub mod config;
pub mod election;

pub use config::{ElectionConfig, MAX_SEAT_COUNT};
pub use election::{
    BallotBoxCount, CandidateEntry, CandidateRole, ElectionInput, ElectionMetadata, PartyId,
    PartyTally, SeatCount,
};
