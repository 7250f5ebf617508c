mod answer;
mod question;
mod user;
