mod support;

mod gpio;
