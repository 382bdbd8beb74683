pub(crate) mod pick;
pub(crate) mod seeded;
