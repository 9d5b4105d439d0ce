#![cfg(test)]

mod end_session;

mod helpers;
