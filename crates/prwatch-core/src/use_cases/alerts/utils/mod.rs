pub mod message_generator;
