//! Attachment: item прикреплён к socket'у персонажа

use bevy::prelude::*;

/// Attachment — привязка item entity к socket'у родителя
///
/// Вешается на equipped оружие, снимается при drop.
/// Host читает `Changed<Attachment>` и крепит mesh к кости.
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Attachment {
    /// Персонаж-владелец
    pub parent: Entity,

    /// Socket на скелете родителя (например "RightHandSocket")
    pub socket: String,

    /// Тип attachment (для logic/UI)
    pub attachment_type: AttachmentType,
}

impl Attachment {
    /// Создать attachment для weapon
    pub fn weapon(parent: Entity, socket: impl Into<String>) -> Self {
        Self {
            parent,
            socket: socket.into(),
            attachment_type: AttachmentType::Weapon,
        }
    }
}

/// Attachment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AttachmentType {
    Weapon,
}
