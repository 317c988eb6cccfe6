mod guild;
mod message;
mod quota;
mod user;
mod user_guild;
mod webhook;
