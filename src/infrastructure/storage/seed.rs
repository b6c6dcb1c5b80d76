use crate::domain::error::SqlChatError;
use std::path::Path;
use tokio_rusqlite::{params, Connection};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadyExists,
}

const SAMPLE_STUDENTS: [(&str, &str, &str, &str); 4] = [
    ("أحمد", "الغامدي", "ذكر", "2005-03-15"),
    ("فاطمة", "الشهري", "Female", "2006-07-22"),
    ("محمد", "القحطاني", "ذكر", "2005-11-10"),
    ("نورة", "العتيبي", "Female", "2007-01-30"),
];

const SAMPLE_EDUCATION: [(i64, &str, &str); 5] = [
    (1, "ثانوي", "ممتاز"),
    (2, "متوسط", "جيد جداً"),
    (3, "ثانوي", "جيد"),
    (4, "ابتدائي", "ممتاز"),
    (1, "متوسط", "جيد"), // 同一学生的往年记录
];

const SAMPLE_PARENTS: [(i64, &str); 3] = [(1, "0501234567"), (2, "0559876543"), (4, "0512233445")];

/// Create the student schema with sample rows, unless the file already exists.
///
/// An existing database is never touched.
pub async fn init_sample_database(db_path: &Path) -> Result<SeedOutcome, SqlChatError> {
    if tokio::fs::try_exists(db_path).await? {
        info!("Database {} found", db_path.display());
        return Ok(SeedOutcome::AlreadyExists);
    }

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let db = Connection::open(db_path.to_path_buf()).await?;

    db.call(|conn| {
        let tx = conn.transaction()?;

        tx.execute_batch(
            "CREATE TABLE IF NOT EXISTS Students (
                StudentID INTEGER PRIMARY KEY AUTOINCREMENT,
                FirstName TEXT NOT NULL,
                LastName TEXT NOT NULL,
                Gender TEXT,
                DateOfBirth TEXT
            );
            CREATE TABLE IF NOT EXISTS Education (
                EducationID INTEGER PRIMARY KEY AUTOINCREMENT,
                StudentID INTEGER,
                Level TEXT,
                Grade TEXT,
                FOREIGN KEY (StudentID) REFERENCES Students (StudentID)
            );
            CREATE TABLE IF NOT EXISTS Parents (
                ParentID INTEGER PRIMARY KEY AUTOINCREMENT,
                StudentID INTEGER,
                ContactNumber TEXT,
                FOREIGN KEY (StudentID) REFERENCES Students (StudentID)
            );",
        )?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO Students (FirstName, LastName, Gender, DateOfBirth) VALUES (?, ?, ?, ?)",
            )?;
            for (first, last, gender, dob) in SAMPLE_STUDENTS {
                stmt.execute(params![first, last, gender, dob])?;
            }

            let mut stmt =
                tx.prepare("INSERT INTO Education (StudentID, Level, Grade) VALUES (?, ?, ?)")?;
            for (student_id, level, grade) in SAMPLE_EDUCATION {
                stmt.execute(params![student_id, level, grade])?;
            }

            let mut stmt =
                tx.prepare("INSERT INTO Parents (StudentID, ContactNumber) VALUES (?, ?)")?;
            for (student_id, contact) in SAMPLE_PARENTS {
                stmt.execute(params![student_id, contact])?;
            }
        }

        tx.commit()?;
        Ok::<_, rusqlite::Error>(())
    })
    .await?;

    db.close().await?;
    info!("Created sample database at {}", db_path.display());
    Ok(SeedOutcome::Created)
}
