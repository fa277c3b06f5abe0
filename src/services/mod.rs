pub mod signups;
