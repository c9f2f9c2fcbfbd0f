#[cfg(test)]
mod common;


#[cfg(test)]
mod test_fight_errors;
