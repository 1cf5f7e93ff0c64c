//! Command processor.
//!
//! A pure, total function from `(state, command)` to the next state.
//! Each command narrows scope root → semester → course → lecture and
//! rebuilds only the nodes on that path; siblings are shared by `Arc`.
//!
//! # No-op Policy
//! A command whose semester, course, or lecture does not resolve returns
//! the input state unchanged. Nothing here returns an error or panics.
//!
//! # Usage
//!
//! ```
//! use u_timetable::{apply, Course, ScheduleCommand, Semester};
//!
//! let s0 = apply(None, ScheduleCommand::add_semester(Semester::new("s1")));
//! let s1 = apply(Some(&s0), ScheduleCommand::add_course("s1", Course::new("c1")));
//!
//! assert_eq!(s1.semester("s1").unwrap().course_codes(), vec!["c1"]);
//! assert!(s0.semester("s1").unwrap().courses.is_empty());
//! ```

mod sequence;

use std::sync::Arc;
use tracing::trace;

use crate::command::ScheduleCommand;
use crate::models::{Course, Lecture, ScheduleState, Semester};

/// Applies `command` to `state` and returns the next state.
///
/// An absent state is treated as the empty schedule.
pub fn apply(state: Option<&ScheduleState>, command: ScheduleCommand) -> ScheduleState {
    let empty;
    let state = match state {
        Some(s) => s,
        None => {
            empty = ScheduleState::new();
            &empty
        }
    };

    match command {
        ScheduleCommand::AddSemester { semester } => add_semester(state, semester),
        ScheduleCommand::AddCourse { semester, course } => add_course(state, semester, course),
        ScheduleCommand::RemoveCourse {
            semester,
            course_code,
        } => remove_course(state, semester, &course_code),
        ScheduleCommand::AddLecture {
            semester,
            course_code,
            lecture,
        } => add_lecture(state, semester, &course_code, lecture),
        ScheduleCommand::RemoveLecture {
            semester,
            course_code,
            day,
            start_time,
        } => remove_lecture(state, semester, &course_code, day, start_time),
    }
}

impl ScheduleState {
    /// Applies `command` and returns the next state. `self` is not modified.
    pub fn apply(&self, command: ScheduleCommand) -> ScheduleState {
        apply(Some(self), command)
    }
}

fn add_semester(state: &ScheduleState, semester: Semester) -> ScheduleState {
    state.with_semester(semester.id.clone(), Arc::new(semester))
}

fn add_course(state: &ScheduleState, semester_id: String, course: Course) -> ScheduleState {
    let Some(semester) = state.semester_arc(&semester_id) else {
        trace!(semester = %semester_id, "add_course: semester not found");
        return state.clone();
    };

    let code = course.code.clone();
    let courses = sequence::upsert_front(&semester.courses, Arc::new(course), |c| c.code == code);
    let next = rebuild_semester(semester, courses);
    state.with_semester(semester_id, next)
}

fn remove_course(state: &ScheduleState, semester_id: String, code: &str) -> ScheduleState {
    let Some(semester) = state.semester_arc(&semester_id) else {
        trace!(semester = %semester_id, "remove_course: semester not found");
        return state.clone();
    };

    match sequence::remove_where(&semester.courses, |c| c.code == code) {
        Some(courses) => {
            let next = rebuild_semester(semester, courses);
            state.with_semester(semester_id, next)
        }
        None => {
            trace!(semester = %semester_id, course = code, "remove_course: course not found");
            state.clone()
        }
    }
}

fn add_lecture(
    state: &ScheduleState,
    semester_id: String,
    code: &str,
    lecture: Lecture,
) -> ScheduleState {
    let (day, start_time) = lecture.key();
    update_course(state, semester_id, code, |course| {
        Some(sequence::upsert_front(
            &course.lectures,
            Arc::new(lecture),
            |l| l.is_at(day, start_time),
        ))
    })
}

fn remove_lecture(
    state: &ScheduleState,
    semester_id: String,
    code: &str,
    day: u8,
    start_time: u32,
) -> ScheduleState {
    update_course(state, semester_id, code, |course| {
        let lectures = sequence::remove_where(&course.lectures, |l| l.is_at(day, start_time));
        if lectures.is_none() {
            trace!(course = code, day, start_time, "remove_lecture: lecture not found");
        }
        lectures
    })
}

/// Resolves semester then course and replaces the course's lecture
/// sequence with what `rebuild` returns, keeping the course in place.
///
/// `rebuild` returning `None` means "unchanged".
fn update_course(
    state: &ScheduleState,
    semester_id: String,
    code: &str,
    rebuild: impl FnOnce(&Course) -> Option<Vec<Arc<Lecture>>>,
) -> ScheduleState {
    let Some(semester) = state.semester_arc(&semester_id) else {
        trace!(semester = %semester_id, "lecture command: semester not found");
        return state.clone();
    };
    let Some(index) = semester.courses.iter().position(|c| c.code == code) else {
        trace!(semester = %semester_id, course = code, "lecture command: course not found");
        return state.clone();
    };
    let Some(lectures) = rebuild(&semester.courses[index]) else {
        return state.clone();
    };

    let course = &semester.courses[index];
    let mut courses = semester.courses.clone();
    courses[index] = Arc::new(Course {
        code: course.code.clone(),
        name: course.name.clone(),
        lectures,
        attributes: course.attributes.clone(),
    });

    let next = rebuild_semester(semester, courses);
    state.with_semester(semester_id, next)
}

fn rebuild_semester(semester: &Semester, courses: Vec<Arc<Course>>) -> Arc<Semester> {
    Arc::new(Semester {
        id: semester.id.clone(),
        name: semester.name.clone(),
        courses,
    })
}
