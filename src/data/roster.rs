use crate::{
    data::student::{NewStudent, Student, StudentPatch},
    error::{LadderError, LadderResult},
};
use jiff::civil::{Date, DateTime, date};

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

///the derived numbers shown above the students table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub mean_rating: u32,
    pub active_today: usize,
}

///the in-memory student store - everything resets to the sample records on restart
#[derive(Clone, Debug)]
pub struct Roster {
    students: Vec<Student>,
    //monotonic, so removing a student can never make an old id come back
    next_id: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }
}

impl Roster {
    pub fn seeded() -> Self {
        let students = vec![
            Student {
                id: "1".into(),
                name: "John Doe".into(),
                email: "john.doe@example.com".into(),
                phone: "+1234567890".into(),
                codeforces_handle: "johndoe123".into(),
                current_rating: 1547,
                max_rating: 1652,
                last_updated: date(2024, 6, 15).at(14, 30, 0, 0),
                email_reminders: 2,
                reminder_enabled: true,
            },
            Student {
                id: "2".into(),
                name: "Jane Smith".into(),
                email: "jane.smith@example.com".into(),
                phone: "+1234567891".into(),
                codeforces_handle: "janesmith456".into(),
                current_rating: 1823,
                max_rating: 1823,
                last_updated: date(2024, 6, 15).at(12, 15, 0, 0),
                email_reminders: 0,
                reminder_enabled: true,
            },
            Student {
                id: "3".into(),
                name: "Mike Johnson".into(),
                email: "mike.johnson@example.com".into(),
                phone: "+1234567892".into(),
                codeforces_handle: "mikej789".into(),
                current_rating: 1234,
                max_rating: 1456,
                last_updated: date(2024, 6, 14).at(9, 45, 0, 0),
                email_reminders: 5,
                reminder_enabled: false,
            },
        ];
        let next_id = u64::try_from(students.len()).unwrap_or(u64::MAX) + 1;

        Self { students, next_id }
    }

    ///appends a new student with a fresh id, a zeroed reminder counter and `now` as
    ///its timestamp - nothing already stored gets touched
    pub fn add(&mut self, new_student: NewStudent, now: DateTime) -> Student {
        let student = Student {
            id: self.next_id.to_string(),
            name: new_student.name,
            email: new_student.email,
            phone: new_student.phone,
            codeforces_handle: new_student.codeforces_handle,
            current_rating: new_student.current_rating,
            max_rating: new_student.max_rating,
            last_updated: now,
            email_reminders: 0,
            reminder_enabled: new_student.reminder_enabled,
        };
        self.next_id += 1;
        self.students.push(student.clone());

        student
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    ///applies a sparse patch, refusing to commit anything which would leave the max
    ///rating below the current one - the stored record only changes if every check
    ///passes, and `last_updated` moves to `now` when it does
    pub fn update(
        &mut self,
        id: &str,
        patch: StudentPatch,
        now: DateTime,
    ) -> LadderResult<Student> {
        let Some(student) = self.students.iter_mut().find(|student| student.id == id) else {
            return Err(LadderError::MissingStudent { id: id.to_string() });
        };

        let mut patched = student.clone();
        if let Some(name) = patch.name {
            patched.name = name;
        }
        if let Some(email) = patch.email {
            patched.email = email;
        }
        if let Some(phone) = patch.phone {
            patched.phone = phone;
        }
        if let Some(codeforces_handle) = patch.codeforces_handle {
            patched.codeforces_handle = codeforces_handle;
        }
        if let Some(current_rating) = patch.current_rating {
            patched.current_rating = current_rating;
        }
        if let Some(max_rating) = patch.max_rating {
            patched.max_rating = max_rating;
        }
        if let Some(email_reminders) = patch.email_reminders {
            patched.email_reminders = email_reminders;
        }
        if let Some(reminder_enabled) = patch.reminder_enabled {
            patched.reminder_enabled = reminder_enabled;
        }

        if patched.max_rating < patched.current_rating {
            return Err(LadderError::RatingsOutOfOrder {
                current_rating: patched.current_rating,
                max_rating: patched.max_rating,
            });
        }

        patched.last_updated = now;
        *student = patched.clone();

        Ok(patched)
    }

    ///removes and returns the student - a missing id is an error, not a no-op
    pub fn remove(&mut self, id: &str) -> LadderResult<Student> {
        let Some(index) = self
            .students
            .iter()
            .position(|student| student.id == id)
        else {
            return Err(LadderError::MissingStudent { id: id.to_string() });
        };

        Ok(self.students.remove(index))
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    ///case-insensitive substring match against name, email or handle - an empty term
    ///matches everyone, and the store itself is never touched
    pub fn search(&self, term: &str) -> Vec<&Student> {
        let needle = term.to_lowercase();
        self.students
            .iter()
            .filter(|student| {
                student.name.to_lowercase().contains(&needle)
                    || student.email.to_lowercase().contains(&needle)
                    || student.codeforces_handle.to_lowercase().contains(&needle)
            })
            .collect()
    }

    ///mean current rating rounds to the nearest whole number, and an empty roster
    ///reports 0 rather than dividing by nothing
    pub fn stats(&self, today: Date) -> RosterStats {
        let total = self.students.len();
        let mean_rating = if total == 0 {
            0
        } else {
            let sum: u64 = self
                .students
                .iter()
                .map(|student| u64::from(student.current_rating))
                .sum();
            let count = u64::try_from(total).unwrap_or(u64::MAX);
            u32::try_from((sum + count / 2) / count).unwrap_or(u32::MAX)
        };
        let active_today = self
            .students
            .iter()
            .filter(|student| student.last_updated.date() == today)
            .count();

        RosterStats {
            total,
            mean_rating,
            active_today,
        }
    }
}
