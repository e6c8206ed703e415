#![allow(dead_code)]

use model::{
    records::record::{FieldRef, Fields, Record},
    schema::describe::{FieldDef, RecordType},
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

impl Fields for Person {
    fn fields_mut(&mut self) -> Vec<FieldRef<'_>> {
        vec![FieldRef::scalar(&mut self.id), FieldRef::scalar(&mut self.name)]
    }
}

impl Record for Person {
    fn describe() -> RecordType {
        RecordType::new("Person")
            .field(FieldDef::scalar("ID").column("id"))
            .field(FieldDef::scalar("Name").column("name"))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Friends {
    pub id: i64,
    pub person_a: Person,
    pub person_b: Person,
}

impl Fields for Friends {
    fn fields_mut(&mut self) -> Vec<FieldRef<'_>> {
        vec![
            FieldRef::scalar(&mut self.id),
            FieldRef::record(&mut self.person_a),
            FieldRef::record(&mut self.person_b),
        ]
    }
}

impl Record for Friends {
    fn describe() -> RecordType {
        RecordType::new("Friends")
            .field(FieldDef::scalar("ID").column("id"))
            .field(FieldDef::record::<Person>("PersonA").foreign("people,id,person_a_id"))
            .field(FieldDef::record::<Person>("PersonB").foreign("people,id,person_b_id"))
    }
}

/// A person with an untagged field and a field excluded from selection.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Member {
    pub age: i32,
    pub password: String,
    pub email: Option<String>,
}

impl Fields for Member {
    fn fields_mut(&mut self) -> Vec<FieldRef<'_>> {
        vec![
            FieldRef::scalar(&mut self.age),
            FieldRef::scalar(&mut self.password),
            FieldRef::scalar(&mut self.email),
        ]
    }
}

impl Record for Member {
    fn describe() -> RecordType {
        RecordType::new("Member")
            .field(FieldDef::scalar("age"))
            .field(FieldDef::scalar("Password").omit())
            .field(FieldDef::scalar("Email").column("email"))
    }
}

/// A comment whose author lives in another table and whose author's team
/// lives in a third one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    pub title: String,
}

impl Fields for Team {
    fn fields_mut(&mut self) -> Vec<FieldRef<'_>> {
        vec![FieldRef::scalar(&mut self.id), FieldRef::scalar(&mut self.title)]
    }
}

impl Record for Team {
    fn describe() -> RecordType {
        RecordType::new("Team")
            .field(FieldDef::scalar("ID").column("id"))
            .field(FieldDef::scalar("Title").column("title"))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Author {
    pub name: String,
    pub secret: String,
    pub team: Team,
}

impl Fields for Author {
    fn fields_mut(&mut self) -> Vec<FieldRef<'_>> {
        vec![
            FieldRef::scalar(&mut self.name),
            FieldRef::scalar(&mut self.secret),
            FieldRef::record(&mut self.team),
        ]
    }
}

impl Record for Author {
    fn describe() -> RecordType {
        RecordType::new("Author")
            .field(FieldDef::scalar("Name").column("name"))
            .field(FieldDef::scalar("Secret").omit())
            .field(FieldDef::record::<Team>("Team").foreign("teams,id,team_id"))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub author: Author,
    pub body: String,
}

impl Fields for Comment {
    fn fields_mut(&mut self) -> Vec<FieldRef<'_>> {
        vec![
            FieldRef::scalar(&mut self.id),
            FieldRef::record(&mut self.author),
            FieldRef::scalar(&mut self.body),
        ]
    }
}

impl Record for Comment {
    fn describe() -> RecordType {
        RecordType::new("Comment")
            .field(FieldDef::scalar("ID").column("id"))
            .field(FieldDef::record::<Author>("Author").foreign("people,id,author_id"))
            .field(FieldDef::scalar("Body").column("body"))
    }
}
